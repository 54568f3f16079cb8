// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::coord;
use crate::{
    InputError, MAX_ASSIGNMENT_ITEMS, parse_warehouse_id, resolve_location, validate_group_bound,
    validate_item_count,
};
use shelfgrid_domain::WarehouseId;

#[test]
fn test_warehouse_id_is_trimmed() {
    let warehouse: WarehouseId = parse_warehouse_id("  dock-7_b ").unwrap();

    assert_eq!(warehouse.value(), "dock-7_b");
}

#[test]
fn test_warehouse_id_rejects_path_characters() {
    assert_eq!(
        parse_warehouse_id("a/b").unwrap_err(),
        InputError::InvalidWarehouseId {
            value: String::from("a/b")
        }
    );
    assert!(parse_warehouse_id("   ").is_err());
}

#[test]
fn test_item_count_bounds() {
    assert!(validate_item_count(0).is_err());
    assert_eq!(validate_item_count(1).unwrap(), 1);
    assert_eq!(
        validate_item_count(MAX_ASSIGNMENT_ITEMS).unwrap(),
        MAX_ASSIGNMENT_ITEMS
    );
    assert_eq!(
        validate_item_count(MAX_ASSIGNMENT_ITEMS + 1).unwrap_err().field(),
        "item_count"
    );
}

#[test]
fn test_group_bound_must_be_positive() {
    assert_eq!(validate_group_bound(None).unwrap(), None);
    assert_eq!(validate_group_bound(Some(2)).unwrap(), Some(2));
    assert_eq!(
        validate_group_bound(Some(0)).unwrap_err(),
        InputError::ZeroGroupBound
    );
}

#[test]
fn test_resolve_location_accepts_either_form() {
    assert_eq!(
        resolve_location(Some(coord(0, 3, 1, 2, 0)), None).unwrap(),
        Some(coord(0, 3, 1, 2, 0))
    );
    assert_eq!(
        resolve_location(None, Some("f00ab03d00c02")).unwrap(),
        Some(coord(0, 3, 1, 2, 0))
    );
    assert_eq!(resolve_location(None, None).unwrap(), None);
}

#[test]
fn test_resolve_location_rejects_both_forms() {
    assert_eq!(
        resolve_location(Some(coord(0, 0, 0, 0, 0)), Some("F00AA00D00C00")).unwrap_err(),
        InputError::AmbiguousLocation
    );
}

#[test]
fn test_resolve_location_rejects_bad_code() {
    let err: InputError = resolve_location(None, Some("F0AB03D00C02")).unwrap_err();

    assert_eq!(err.field(), "code");
    assert_eq!(
        err.to_string(),
        "'F0AB03D00C02' is not a location code of the form F00AA00D00C00"
    );
}

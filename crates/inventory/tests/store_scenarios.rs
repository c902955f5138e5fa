//! Black-box scenarios against the public store API.

use beanbags_inventory::{AddBeanBags, BeanBagStore, StoreError};

fn store_with(items: &[(i64, &str, &str, &str)]) -> BeanBagStore {
    beanbags_observability::init();
    let mut store = BeanBagStore::new();
    for &(quantity, manufacturer, name, id) in items {
        store.add_stock(quantity, manufacturer, name, id, None).unwrap();
    }
    store
}

#[test]
fn stock_sell_and_value_round_trip() {
    let mut store = store_with(&[
        (10, "Acme", "Puff", "00000001"),
        (4, "Zeta", "Blob", "00000002"),
    ]);
    store.set_price("00000001", 1500).unwrap();
    store.set_price("00000002", 2000).unwrap();

    store.sell(3, "00000001").unwrap();
    store.sell(4, "00000002").unwrap();
    store.sell(2, "00000001").unwrap();

    assert_eq!(store.total_in_stock(), 5);
    assert_eq!(store.distinct_in_stock_count(), 1);
    assert_eq!(store.total_sold(), 9);
    assert_eq!(store.sold_value("00000001").unwrap(), 7500);
    assert_eq!(store.sold_value("00000002").unwrap(), 8000);
    assert_eq!(store.total_sold_value(), 15500);
}

#[test]
fn rename_carries_history() {
    let mut store = store_with(&[(6, "Acme", "Puff", "0000abcd")]);
    store.set_price("0000ABCD", 100).unwrap();
    store.sell(4, "0000abcd").unwrap();

    let before = store.sold_count("0000ABCD").unwrap();
    store.replace_id("0000ABCD", "1234ABCD").unwrap();

    assert_eq!(store.sold_count("1234abcd").unwrap(), before);
    assert_eq!(
        store.sold_count("0000ABCD").unwrap_err(),
        StoreError::UnknownId("0000ABCD".to_string())
    );

    // The new id keeps the stock record and its details.
    store.add_stock(1, "Acme", "Puff", "1234ABCD", None).unwrap();
    assert_eq!(store.in_stock("1234ABCD").unwrap(), 3);
}

#[test]
fn previously_stocked_differs_from_never_stocked() {
    let mut store = store_with(&[(1, "Acme", "Puff", "00000001")]);
    store.set_price("00000001", 10).unwrap();
    store.sell(1, "00000001").unwrap();

    assert_eq!(store.in_stock("00000001").unwrap(), 0);
    assert!(matches!(store.sell(1, "00000001"), Err(StoreError::OutOfStock(_))));
    assert!(matches!(store.sell(1, "00000009"), Err(StoreError::UnknownId(_))));
}

#[test]
fn empty_resets_everything() {
    let mut store = store_with(&[
        (2, "Acme", "Puff", "00000001"),
        (2, "Zeta", "Blob", "00000002"),
    ]);
    store.set_price("00000001", 10).unwrap();
    store.sell(1, "00000001").unwrap();

    store.empty();

    assert_eq!(store.total_in_stock(), 0);
    assert_eq!(store.distinct_in_stock_count(), 0);
    assert_eq!(store.total_sold(), 0);
    assert_eq!(store.total_sold_value(), 0);
    for id in ["00000001", "00000002"] {
        assert!(matches!(store.in_stock(id), Err(StoreError::UnknownId(_))));
        assert!(matches!(store.sold_count(id), Err(StoreError::UnknownId(_))));
        assert!(matches!(store.sold_value(id), Err(StoreError::UnknownId(_))));
        assert!(matches!(store.details(id), Err(StoreError::UnknownId(_))));
    }

    // Ids are free again, with any details.
    store.add_stock(1, "Other", "Thing", "00000001", None).unwrap();
    assert_eq!(store.in_stock("00000001").unwrap(), 1);
}

#[test]
fn intake_command_serializes_as_plain_fields() {
    let cmd = AddBeanBags::new(3, "Acme", "Puff", "0000000a")
        .with_information("vinyl")
        .with_intake(2024, 5);
    let json = serde_json::to_value(&cmd).unwrap();

    assert_eq!(json["quantity"], 3);
    assert_eq!(json["id"], "0000000a");
    assert_eq!(json["intake"]["month"], 5);

    let back: AddBeanBags = serde_json::from_value(json).unwrap();
    let mut store = BeanBagStore::new();
    store.add_bean_bags(back).unwrap();
    assert_eq!(store.details("0000000A").unwrap(), "vinyl");
}

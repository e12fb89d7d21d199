//! Black-box run of the catalog through its public trait surface, mirroring
//! the reference shop scenario: duplicate ids, deletion, capped searches and
//! shared-name disambiguation.

use storefront_catalog::{Catalog, InMemoryCatalog, Product};
use storefront_core::ProductId;

fn product(id: &str, name: &str, producer: &str) -> Product {
    Product::new(id, name, producer).expect("fixture product should be valid")
}

#[test]
fn shop_scenario_end_to_end() {
    storefront_observability::init();

    let mut shop = InMemoryCatalog::new();

    assert!(!shop.delete(&ProductId::new("1")));
    assert!(shop.add(product("1", "1", "Lex")));
    assert!(!shop.add(product("1", "any name because we check id only", "any producer")));
    assert!(shop.delete(&ProductId::new("1")));

    assert!(shop.add(product("3", "Some Product3", "Some Producer2")));
    assert!(shop.add(product("4", "Some Product1", "Some Producer3")));
    assert!(shop.add(product("2", "Some Product2", "Some Producer2")));
    assert!(shop.add(product("1", "Some Product1", "Some Producer1")));
    assert!(shop.add(product("5", "Other Product5", "Other Producer4")));
    assert!(shop.add(product("6", "Other Product6", "Other Producer4")));
    assert!(shop.add(product("7", "Other Product7", "Other Producer4")));
    assert!(shop.add(product("8", "Other Product8", "Other Producer4")));
    assert!(shop.add(product("9", "Other Product9", "Other Producer4")));
    assert!(shop.add(product("10", "Other Product10", "Other Producer4")));
    assert!(shop.add(product("11", "Other Product11", "Other Producer4")));

    // Eleven matches collapse to eleven distinct entries, capped at ten.
    let by_name = shop.search_by_name("Product");
    assert_eq!(by_name.len(), 10);

    let by_name = shop.search_by_name("Some Product");
    assert_eq!(by_name.len(), 4);
    assert!(by_name.contains("Some Producer1 - Some Product1"));
    assert!(by_name.contains("Some Producer3 - Some Product1"));
    assert!(!by_name.contains("Some Product1"));
    assert!(by_name.contains("Some Product2"));
    assert!(by_name.contains("Some Product3"));

    let by_producer = shop.search_by_producer("Producer");
    assert_eq!(by_producer.len(), 10);

    let by_producer = shop.search_by_producer("Some Producer");
    assert_eq!(by_producer.len(), 4);
    assert_eq!(by_producer[0], "Some Product1");
    assert!(by_producer[1] == "Some Product2" || by_producer[1] == "Some Product3");
    assert!(by_producer[2] == "Some Product2" || by_producer[2] == "Some Product3");
    assert_eq!(by_producer[3], "Some Product1");
}

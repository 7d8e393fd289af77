use assert_float_eq::*;

use pouchamama_rs::{Catalog, CartStore};

#[test]
fn test_total_items_counts_every_add() {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = CartStore::new();

    let sequence = ["1", "2", "1", "6", "2", "1", "4"];
    for id in sequence {
        cart.add_item(catalog.get(id).unwrap().line_item());
    }

    assert_eq!(cart.total_items(), sequence.len() as u32);
    assert_eq!(cart.len(), 4);
    assert_eq!(cart.quantity_of("1"), 3);
    assert_eq!(cart.quantity_of("2"), 2);
}

#[test]
fn test_remove_undoes_add() {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = CartStore::new();
    cart.add_item(catalog.get("3").unwrap().line_item());
    let before = cart.lines().to_vec();

    // Existing line: back to the previous quantity
    cart.add_item(catalog.get("3").unwrap().line_item());
    cart.remove_item("3");
    assert_eq!(cart.lines(), before.as_slice());

    // New line: back to absent
    cart.add_item(catalog.get("5").unwrap().line_item());
    cart.remove_item("5");
    assert_eq!(cart.lines(), before.as_slice());
    assert_eq!(cart.quantity_of("5"), 0);
}

#[test]
fn test_subtotal_uses_snapshot_prices() {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = CartStore::new();

    // 2 x 14.99 + 1 x 10.99
    cart.add_item(catalog.get("2").unwrap().line_item());
    cart.add_item(catalog.get("2").unwrap().line_item());
    cart.add_item(catalog.get("6").unwrap().line_item());

    assert_float_absolute_eq!(cart.subtotal(), 40.97, 1e-9);

    let lomo = &cart.lines()[0];
    assert_eq!(lomo.item.name, "Lomo Saltado Trail Mix");
    assert_float_absolute_eq!(lomo.line_total(), 29.98, 1e-9);
}

#[test]
fn test_clear_after_mixed_operations() {
    let catalog = Catalog::builtin().unwrap();
    let mut cart = CartStore::new();
    for product in &catalog {
        cart.add_item(product.line_item());
    }
    cart.remove_item("1");
    assert_eq!(cart.total_items(), 5);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
}

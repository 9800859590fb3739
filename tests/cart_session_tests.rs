use std::io::Write;

use cart_cli::models::{Catalog, CatalogError, SortMode};
use cart_cli::services::{CartService, CartServiceError};
use cart_cli::utils::formatting::{format_cart_table, format_grand_total, format_price};
use tempfile::NamedTempFile;

fn write_catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write catalog file");
    file
}

#[test]
fn test_full_shopping_session() {
    // Mirrors a user session: seeded cart, two adds, one remove,
    // rendered through every sort mode along the way.
    let mut cart =
        CartService::with_initial_line(Catalog::builtin(), "ayakkabi").expect("seed failed");

    cart.add_item("canta").unwrap();
    cart.add_item("canta").unwrap();

    let snapshot = cart.snapshot(SortMode::PriceDesc);
    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.rows[0].product_id, "canta"); // 38 > 18
    assert_eq!(snapshot.grand_total, 18.0 + 2.0 * 19.0);

    cart.remove_item("ayakkabi").unwrap();

    let snapshot = cart.snapshot(SortMode::PriceDesc);
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.rows[0].quantity, 2);
    assert_eq!(snapshot.grand_total, 38.0);

    // The zeroed line stays hidden in every mode
    for mode in SortMode::ALL {
        assert!(cart
            .snapshot(mode)
            .rows
            .iter()
            .all(|row| row.product_id != "ayakkabi"));
    }
}

#[test]
fn test_rendered_output_matches_snapshot() {
    let mut cart = CartService::new(Catalog::builtin());
    cart.add_item("canta").unwrap();
    cart.add_item("canta").unwrap();

    let snapshot = cart.snapshot(SortMode::default());
    let table = format_cart_table(&snapshot, "₺");
    assert!(table.contains("Çanta"));
    assert!(table.contains("38₺"));

    let total_line = format_grand_total(&snapshot, "₺");
    assert!(total_line.contains(&format_price(38.0, "₺")));
}

#[test]
fn test_catalog_loaded_from_json_file() {
    let file = write_catalog_file(
        r#"[
            {"id": "kemer", "name": "Kemer", "price": 9.5},
            {"id": "atki", "name": "Atkı", "price": 12.0}
        ]"#,
    );

    let catalog = Catalog::from_json_file(file.path()).expect("catalog should load");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("kemer").unwrap().price, 9.5);

    let mut cart = CartService::new(catalog);
    cart.add_item("atki").unwrap();
    let snapshot = cart.snapshot(SortMode::default());
    assert_eq!(snapshot.grand_total, 12.0);
}

#[test]
fn test_catalog_file_with_invalid_price_is_rejected() {
    let file = write_catalog_file(r#"[{"id": "kemer", "name": "Kemer", "price": -3.0}]"#);

    let result = Catalog::from_json_file(file.path());
    assert!(matches!(result, Err(CatalogError::InvalidProduct { .. })));
}

#[test]
fn test_catalog_file_with_bad_json_is_rejected() {
    let file = write_catalog_file("not json");

    let result = Catalog::from_json_file(file.path());
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn test_unknown_product_does_not_break_the_session() {
    let mut cart = CartService::new(Catalog::builtin());
    cart.add_item("ayakkabi").unwrap();

    let before = cart.snapshot(SortMode::default());
    let err = cart.add_item("telefon").unwrap_err();
    assert_eq!(
        err,
        CartServiceError::UnknownProduct {
            id: "telefon".to_string()
        }
    );

    // The rejected mutation leaves the view unchanged
    let after = cart.snapshot(SortMode::default());
    assert_eq!(before, after);
}

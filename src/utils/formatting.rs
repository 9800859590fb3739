use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::cart::{CartRow, CartSnapshot};
use crate::models::product::Product;

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Unit price")]
    unit_price: String,
    #[tabled(rename = "Line total")]
    line_total: String,
}

pub fn format_cart_table(snapshot: &CartSnapshot, currency: &str) -> String {
    if snapshot.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = snapshot
        .rows
        .iter()
        .map(|row| CartTableRow {
            name: row.name.clone(),
            quantity: row.quantity,
            unit_price: format_price(row.unit_price, currency),
            line_total: format_price(row.line_total, currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_grand_total(snapshot: &CartSnapshot, currency: &str) -> String {
    format!(
        "{}: {}",
        style("Total").bold(),
        style(format_price(snapshot.grand_total, currency)).green()
    )
}

/// Label for the product selector, like the original's option text.
pub fn format_product_choice(product: &Product, currency: &str) -> String {
    format!("{} ({})", product.name, format_price(product.price, currency))
}

/// Label for the remove selector: one entry per visible cart line.
pub fn format_row_choice(row: &CartRow, currency: &str) -> String {
    format!(
        "{} x{} - {}",
        row.name,
        row.quantity,
        format_price(row.line_total, currency)
    )
}

/// Whole prices render without decimals, anything else with two.
pub fn format_price(amount: f64, currency: &str) -> String {
    if amount.fract() == 0.0 {
        format!("{}{}", amount as i64, currency)
    } else {
        format!("{:.2}{}", amount, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(18.0, "₺"), "18₺");
        assert_eq!(format_price(38.0, "₺"), "38₺");
        assert_eq!(format_price(19.5, "₺"), "19.50₺");
        assert_eq!(format_price(0.0, "$"), "0$");
    }

    #[test]
    fn test_format_product_choice() {
        let product = Product::new("canta", "Çanta", 19.0);
        assert_eq!(format_product_choice(&product, "₺"), "Çanta (19₺)");
    }

    #[test]
    fn test_empty_snapshot_renders_nothing() {
        let snapshot = CartSnapshot {
            rows: Vec::new(),
            grand_total: 0.0,
        };
        assert_eq!(format_cart_table(&snapshot, "₺"), "");
    }

    #[test]
    fn test_cart_table_contains_rows() {
        let snapshot = CartSnapshot {
            rows: vec![CartRow {
                product_id: "ayakkabi".to_string(),
                name: "Ayakkabı".to_string(),
                quantity: 2,
                unit_price: 18.0,
                line_total: 36.0,
            }],
            grand_total: 36.0,
        };

        let table = format_cart_table(&snapshot, "₺");
        assert!(table.contains("Ayakkabı"));
        assert!(table.contains("36₺"));
    }
}

use std::cmp::Ordering;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display order for the cart view. Price modes order by line total
/// (quantity x unit price), not by unit price.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortMode {
    #[default]
    NameAsc,
    NameDesc,
    PriceDesc,
    PriceAsc,
    QtyDesc,
    QtyAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::PriceDesc,
        SortMode::PriceAsc,
        SortMode::QtyDesc,
        SortMode::QtyAsc,
    ];

    /// Human label for the sort-mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::NameAsc => "Name (A-Z)",
            SortMode::NameDesc => "Name (Z-A)",
            SortMode::PriceDesc => "Price (high to low)",
            SortMode::PriceAsc => "Price (low to high)",
            SortMode::QtyDesc => "Quantity (high to low)",
            SortMode::QtyAsc => "Quantity (low to high)",
        }
    }

    /// Total order over cart rows for this mode.
    pub fn compare(&self, a: &CartRow, b: &CartRow) -> Ordering {
        match self {
            SortMode::NameAsc => a.name.cmp(&b.name),
            SortMode::NameDesc => b.name.cmp(&a.name),
            SortMode::PriceDesc => b.line_total.total_cmp(&a.line_total),
            SortMode::PriceAsc => a.line_total.total_cmp(&b.line_total),
            SortMode::QtyDesc => b.quantity.cmp(&a.quantity),
            SortMode::QtyAsc => a.quantity.cmp(&b.quantity),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::NameAsc => write!(f, "name-asc"),
            SortMode::NameDesc => write!(f, "name-desc"),
            SortMode::PriceDesc => write!(f, "price-desc"),
            SortMode::PriceAsc => write!(f, "price-asc"),
            SortMode::QtyDesc => write!(f, "qty-desc"),
            SortMode::QtyAsc => write!(f, "qty-asc"),
        }
    }
}

/// One visible cart line joined with its catalog data. Rebuilt on every
/// snapshot, never stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartRow {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

/// The fully computed cart view handed to the display layer: rows in
/// display order plus the grand total over them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartSnapshot {
    pub rows: Vec<CartRow>,
    pub grand_total: f64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

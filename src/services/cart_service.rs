use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{
    cart::{CartRow, CartSnapshot, SortMode},
    product::{Catalog, Product},
};

#[derive(Error, Debug, PartialEq)]
pub enum CartServiceError {
    #[error("Unknown product '{id}'")]
    UnknownProduct { id: String },

    #[error("Product '{id}' is not in the cart")]
    LineNotInCart { id: String },
}

/// Owns the cart state: a mapping from product id to held quantity,
/// mutated only through `add_item`/`remove_item`. The catalog is injected
/// at construction and never changes. Quantities clamp at zero on removal;
/// a line clamped to zero stays in the mapping but is excluded from
/// snapshots until it is added again.
pub struct CartService {
    catalog: Catalog,
    cart: BTreeMap<String, u32>,
}

impl CartService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: BTreeMap::new(),
        }
    }

    /// Start the session with one line already in the cart at quantity 1.
    pub fn with_initial_line(
        catalog: Catalog,
        product_id: &str,
    ) -> Result<Self, CartServiceError> {
        let mut service = Self::new(catalog);
        service.add_item(product_id)?;
        Ok(service)
    }

    /// Increment the quantity held for `product_id`, creating the line at
    /// quantity 1 if absent. Unknown ids are rejected instead of being
    /// stored as orphan lines.
    pub fn add_item(&mut self, product_id: &str) -> Result<(), CartServiceError> {
        if !self.catalog.contains(product_id) {
            warn!("Rejected add for unknown product: {}", product_id);
            return Err(CartServiceError::UnknownProduct {
                id: product_id.to_string(),
            });
        }

        let quantity = self.cart.entry(product_id.to_string()).or_insert(0);
        *quantity += 1;
        debug!("Added {} (quantity now {})", product_id, quantity);
        Ok(())
    }

    /// Decrement the quantity held for `product_id`, clamping at zero.
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), CartServiceError> {
        if !self.catalog.contains(product_id) {
            warn!("Rejected remove for unknown product: {}", product_id);
            return Err(CartServiceError::UnknownProduct {
                id: product_id.to_string(),
            });
        }

        match self.cart.get_mut(product_id) {
            Some(quantity) => {
                *quantity = quantity.saturating_sub(1);
                debug!("Removed {} (quantity now {})", product_id, quantity);
                Ok(())
            }
            None => {
                warn!("Rejected remove for product not in cart: {}", product_id);
                Err(CartServiceError::LineNotInCart {
                    id: product_id.to_string(),
                })
            }
        }
    }

    /// Compute the display view: visible lines (quantity >= 1) joined with
    /// catalog data, stable-sorted by `mode`, with the grand total over
    /// them. Pure derivation; calling it twice with no intervening
    /// mutation yields the same snapshot.
    pub fn snapshot(&self, mode: SortMode) -> CartSnapshot {
        let mut rows: Vec<CartRow> = self
            .cart
            .iter()
            .filter(|(_, &quantity)| quantity >= 1)
            .filter_map(|(id, &quantity)| {
                // Every line entered through add_item, so the lookup only
                // misses if state was corrupted. Skip rather than crash
                // the render path.
                let product = self.catalog.get(id)?;
                Some(CartRow {
                    product_id: id.clone(),
                    name: product.name.clone(),
                    quantity,
                    unit_price: product.price,
                    line_total: quantity as f64 * product.price,
                })
            })
            .collect();

        // Stable sort: equal keys keep their pre-sort (id) order
        rows.sort_by(|a, b| mode.compare(a, b));
        let grand_total = rows.iter().map(|row| row.line_total).sum();

        CartSnapshot { rows, grand_total }
    }

    /// Quantity currently held for `product_id` (zero when absent).
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.cart.get(product_id).copied().unwrap_or(0)
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.catalog.get(product_id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True when no line is visible (all quantities zero or cart empty).
    pub fn is_empty(&self) -> bool {
        self.cart.values().all(|&quantity| quantity == 0)
    }
}

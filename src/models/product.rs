use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A purchasable product. Catalog entries are immutable once loaded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct Product {
    #[validate(length(min = 1, max = 64, message = "Product id must be 1-64 characters"))]
    pub id: String,

    #[validate(length(min = 1, max = 255, message = "Product name must be 1-255 characters"))]
    pub name: String,

    #[validate(custom = "validate_price")]
    pub price: f64,
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::new("price_not_negative"));
    }
    Ok(())
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid product '{id}': {errors}")]
    InvalidProduct {
        id: String,
        errors: validator::ValidationErrors,
    },

    #[error("Duplicate product id '{id}' in catalog")]
    DuplicateProduct { id: String },

    #[error("Catalog contains no products")]
    Empty,
}

/// The fixed set of purchasable products, supplied once at construction
/// and read-only afterwards. Entries iterate in id order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for product in products {
            product
                .validate()
                .map_err(|errors| CatalogError::InvalidProduct {
                    id: product.id.clone(),
                    errors,
                })?;
            if map.insert(product.id.clone(), product.clone()).is_some() {
                return Err(CatalogError::DuplicateProduct { id: product.id });
            }
        }
        if map.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { products: map })
    }

    /// Load a catalog from a JSON file containing an array of products.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&contents)?;
        Self::new(products)
    }

    /// The product table the original shipped with.
    pub fn builtin() -> Self {
        let products = vec![
            Product::new("ayakkabi", "Ayakkabı", 18.0),
            Product::new("canta", "Çanta", 19.0),
            Product::new("gomlek", "Gömlek", 20.0),
            Product::new("ceket", "Ceket", 21.0),
            Product::new("sapka", "Şapka", 22.0),
        ];
        // The builtin table is known-good
        Self::new(products).expect("builtin catalog is valid")
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

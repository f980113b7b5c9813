//! Static product seed list
//!
//! A fixed two-entry catalog kept in memory and served only by the
//! authenticated `/products` routes. It is deliberately independent from
//! the product document store; the two resources never see each other's
//! data.

use serde::Serialize;

/// An entry in the seeded catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SeedProduct {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Immutable in-memory product list, constructed once at startup.
pub struct SeedCatalog {
    products: Vec<SeedProduct>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        Self {
            products: vec![
                SeedProduct {
                    id: 1,
                    name: "Product 1".to_string(),
                    price: 19.99,
                },
                SeedProduct {
                    id: 2,
                    name: "Product 2".to_string(),
                    price: 29.99,
                },
            ],
        }
    }

    /// The full seed list, unfiltered.
    pub fn all(&self) -> &[SeedProduct] {
        &self.products
    }

    /// Linear search by integer id.
    pub fn find(&self, id: i64) -> Option<&SeedProduct> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

//! The product catalog.
//!
//! The catalog is a fixed, ordered sequence of products seeded at startup
//! and never mutated. Quantity and observation notes belong to cart lines
//! and popup drafts, never to catalog entries.

use balcao_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URI for display.
    pub image: String,
}

/// The fixed product catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The default menu: the products on offer at the counter.
    #[must_use]
    pub fn seed() -> Self {
        let placeholder = "https://via.placeholder.com/150";
        Self::new(vec![
            Product {
                id: ProductId::new(1),
                name: "Hamburguer".to_string(),
                description: "Delicioso hamburguer de carne".to_string(),
                price: Price::reais(10),
                image: placeholder.to_string(),
            },
            Product {
                id: ProductId::new(2),
                name: "Pizza".to_string(),
                description: "Pizza quentinha e saborosa".to_string(),
                price: Price::reais(20),
                image: placeholder.to_string(),
            },
            Product {
                id: ProductId::new(3),
                name: "Sushi".to_string(),
                description: "Sushi fresquinho e bem preparado".to_string(),
                price: Price::reais(30),
                image: placeholder.to_string(),
            },
        ])
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products on the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

//! The shopping cart store.
//!
//! The cart holds at most one line per product id. Adding a product that is
//! already in the cart increments that line's quantity and replaces its
//! observation (last write wins); lines keep their insertion order, which the
//! order formatter depends on.

use balcao_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Product;

/// One product's presence in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Aggregated quantity, always >= 1.
    pub quantity: u32,
    /// Free-text note for the kitchen, possibly empty.
    pub observation: String,
}

impl CartLine {
    /// Exact price of this line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.line_total(self.quantity)
    }
}

/// Cart operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A zero quantity would create a line that prices to nothing.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// The shopping cart: an insertion-ordered list of cart lines, unique per
/// product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists, its quantity is incremented
    /// by `quantity` and its observation replaced with the supplied one.
    /// Otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is zero.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        observation: String,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
            line.observation = observation;
            debug!(product_id = %product.id, quantity = line.quantity, "Merged cart line");
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
                observation,
            });
            debug!(product_id = %product.id, quantity, "Added cart line");
        }
        Ok(())
    }

    /// Remove the line for a product id. No-op if the product is not in the
    /// cart.
    pub fn remove(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        if self.lines.len() < before {
            debug!(product_id = %product_id, "Removed cart line");
        }
    }

    /// Exact order total: the sum of `price x quantity` over all lines.
    ///
    /// Rounding to two decimal places happens only at display time.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total item count across lines (for the minicart badge).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use balcao_core::ProductId;

    fn menu() -> Catalog {
        Catalog::seed()
    }

    #[test]
    fn test_add_inserts_new_line() {
        let catalog = menu();
        let burger = catalog.get(ProductId::new(1)).expect("product");
        let mut cart = Cart::new();

        cart.add(burger, 2, "sem cebola".to_string()).expect("add");

        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.observation, "sem cebola");
    }

    #[test]
    fn test_add_same_product_merges_and_last_observation_wins() {
        let catalog = menu();
        let burger = catalog.get(ProductId::new(1)).expect("product");
        let mut cart = Cart::new();

        cart.add(burger, 2, "sem cebola".to_string()).expect("add");
        cart.add(burger, 3, "bem passado".to_string()).expect("add");

        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 5);
        assert_eq!(line.observation, "bem passado");
    }

    #[test]
    fn test_at_most_one_line_per_product() {
        let catalog = menu();
        let mut cart = Cart::new();
        for _ in 0..4 {
            for product in catalog.iter() {
                cart.add(product, 1, String::new()).expect("add");
            }
        }
        assert_eq!(cart.len(), catalog.len());
    }

    #[test]
    fn test_add_zero_quantity_is_rejected() {
        let catalog = menu();
        let burger = catalog.get(ProductId::new(1)).expect("product");
        let mut cart = Cart::new();

        let err = cart.add(burger, 0, String::new()).expect_err("rejected");
        assert_eq!(err, CartError::ZeroQuantity);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent_and_targeted() {
        let catalog = menu();
        let mut cart = Cart::new();
        for product in catalog.iter() {
            cart.add(product, 1, String::new()).expect("add");
        }

        cart.remove(ProductId::new(2));
        assert_eq!(cart.len(), 2);
        assert!(cart.lines().iter().all(|l| l.product.id != ProductId::new(2)));

        // Absent id: no-op.
        cart.remove(ProductId::new(2));
        cart.remove(ProductId::new(99));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let catalog = menu();
        let mut cart = Cart::new();
        // {price: 10, qty: 2} + {price: 20, qty: 1} = 40
        cart.add(
            catalog.get(ProductId::new(1)).expect("product"),
            2,
            String::new(),
        )
        .expect("add");
        cart.add(
            catalog.get(ProductId::new(2)).expect("product"),
            1,
            String::new(),
        )
        .expect("add");

        assert_eq!(cart.total(), Decimal::from(40));
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let catalog = menu();
        let mut cart = Cart::new();
        cart.add(
            catalog.get(ProductId::new(1)).expect("product"),
            2,
            String::new(),
        )
        .expect("add");
        cart.add(
            catalog.get(ProductId::new(3)).expect("product"),
            5,
            String::new(),
        )
        .expect("add");

        assert_eq!(cart.item_count(), 7);
        assert_eq!(Cart::new().item_count(), 0);
    }
}

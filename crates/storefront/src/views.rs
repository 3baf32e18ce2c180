//! View models for rendering layers.
//!
//! Pure projections of the application state: formatted prices, the minicart
//! badge count, and which checkout panel (address form or pickup notice) the
//! cart popup should show. No mutation happens here.

use serde::Serialize;

use crate::cart::{Cart, CartLine};
use crate::catalog::Product;
use crate::checkout::{Checkout, DeliveryMode};
use crate::config::StoreConfig;
use balcao_core::ProductId;

/// Product display data for the catalog grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Formatted unit price, e.g. `R$ 10.00`.
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Cart item display data for the cart popup.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub observation: String,
    pub image: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id,
            name: line.product.name.clone(),
            quantity: line.quantity,
            observation: line.observation.clone(),
            image: line.product.image.clone(),
        }
    }
}

/// Cart popup display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted order total, e.g. `R$ 40.00`.
    pub total: String,
    /// Sum of quantities across lines (minicart badge).
    pub item_count: u32,
    /// Human-facing label of the selected mode (`Entrega` / `Retirada`).
    pub delivery_mode_label: String,
    /// Whether the address form is shown (delivery mode only).
    pub show_address_form: bool,
    /// Pickup location notice, present only in pickup mode.
    pub pickup_notice: Option<String>,
}

impl CartView {
    /// Project the cart popup contents from the current state.
    #[must_use]
    pub fn new(cart: &Cart, checkout: &Checkout, config: &StoreConfig) -> Self {
        let pickup = checkout.delivery_mode == DeliveryMode::Pickup;
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total: format!("R$ {:.2}", cart.total()),
            item_count: cart.item_count(),
            delivery_mode_label: checkout.delivery_mode.label().to_string(),
            show_address_form: !pickup,
            pickup_notice: pickup.then(|| config.pickup_notice.clone()),
        }
    }

    /// An empty cart view.
    #[must_use]
    pub fn empty(config: &StoreConfig) -> Self {
        Self::new(&Cart::new(), &Checkout::default(), config)
    }
}

//! Application state and the action reducer.
//!
//! A single [`App`] value owns the catalog, the cart, the checkout record,
//! and both popup machines. Every user affordance is an [`Action`]; applying
//! one runs synchronously and returns the [`Effect`] the caller must
//! perform, if any. Only [`Action::SubmitOrder`] produces an effect.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use balcao_core::ProductId;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{AddressField, Checkout, DeliveryMode};
use crate::config::StoreConfig;
use crate::error::AppError;
use crate::order;
use crate::popup::{CartPopup, ProductPopup};
use crate::views::{CartView, ProductCardView};

/// Every user affordance in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// Open the product-detail popup for a catalog product.
    OpenProduct(ProductId),
    /// Set the draft quantity while the product popup is open.
    SetDraftQuantity(u32),
    /// Replace the draft observation while the product popup is open.
    SetDraftObservation(String),
    /// Commit the draft into the cart and close the product popup.
    AddToCart,
    /// Close the product popup, discarding the draft.
    CloseProduct,
    /// Open the cart popup.
    OpenCart,
    /// Close the cart popup.
    CloseCart,
    /// Remove one product's line from the cart.
    RemoveLine(ProductId),
    /// Select delivery or pickup.
    SetDeliveryMode(DeliveryMode),
    /// Overwrite one address field.
    SetAddressField { field: AddressField, value: String },
    /// Format the order and request the WhatsApp link to be opened.
    SubmitOrder,
}

/// A side effect the caller must perform; the reducer never performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the order deep link (e.g., in a new browser context).
    /// Fire-and-forget; no result is observed by the application.
    OpenLink(Url),
}

/// The whole application state for one user session.
#[derive(Debug, Clone)]
pub struct App {
    config: StoreConfig,
    catalog: Catalog,
    cart: Cart,
    checkout: Checkout,
    product_popup: ProductPopup,
    cart_popup: CartPopup,
}

impl App {
    /// Create an app over a catalog.
    #[must_use]
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            cart: Cart::new(),
            checkout: Checkout::default(),
            product_popup: ProductPopup::default(),
            cart_popup: CartPopup::default(),
        }
    }

    /// Apply one action to the state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] for an unknown product id and
    /// [`AppError::Cart`] when a commit carries a zero quantity (the popup
    /// closes and the cart is left unchanged).
    pub fn apply(&mut self, action: Action) -> Result<Option<Effect>, AppError> {
        debug!(action = ?action, "Applying action");
        match action {
            Action::OpenProduct(id) => {
                let product = self
                    .catalog
                    .get(id)
                    .ok_or(AppError::ProductNotFound(id))?
                    .clone();
                self.product_popup.open_for(&product);
                Ok(None)
            }
            Action::SetDraftQuantity(quantity) => {
                self.product_popup.set_quantity(quantity);
                Ok(None)
            }
            Action::SetDraftObservation(observation) => {
                self.product_popup.set_observation(observation);
                Ok(None)
            }
            Action::AddToCart => {
                if let Some(draft) = self.product_popup.commit() {
                    self.cart
                        .add(&draft.product, draft.quantity, draft.observation)?;
                    info!(product_id = %draft.product.id, "Added to cart");
                }
                Ok(None)
            }
            Action::CloseProduct => {
                self.product_popup.cancel();
                Ok(None)
            }
            Action::OpenCart => {
                self.cart_popup.open();
                Ok(None)
            }
            Action::CloseCart => {
                self.cart_popup.close();
                Ok(None)
            }
            Action::RemoveLine(id) => {
                self.cart.remove(id);
                Ok(None)
            }
            Action::SetDeliveryMode(mode) => {
                self.checkout.set_delivery_mode(mode);
                Ok(None)
            }
            Action::SetAddressField { field, value } => {
                self.checkout.address.set(field, value);
                Ok(None)
            }
            Action::SubmitOrder => {
                let message = order::format_message(self.cart.lines(), &self.checkout);
                let link = order::order_link(&self.config, &message)?;
                info!(lines = self.cart.len(), total = %self.cart.total(), "Order submitted");
                Ok(Some(Effect::OpenLink(link)))
            }
        }
    }

    /// Store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The fixed catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The shopping cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Delivery mode and address.
    #[must_use]
    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    /// Product-detail popup state.
    #[must_use]
    pub fn product_popup(&self) -> &ProductPopup {
        &self.product_popup
    }

    /// Cart popup state.
    #[must_use]
    pub fn cart_popup(&self) -> &CartPopup {
        &self.cart_popup
    }

    /// Catalog grid projection.
    #[must_use]
    pub fn product_cards(&self) -> Vec<ProductCardView> {
        self.catalog.iter().map(ProductCardView::from).collect()
    }

    /// Cart popup projection.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        CartView::new(&self.cart, &self.checkout, &self.config)
    }
}

impl Default for App {
    /// The default store: seeded catalog, default configuration.
    fn default() -> Self {
        Self::new(StoreConfig::default(), Catalog::seed())
    }
}

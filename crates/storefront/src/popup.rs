//! Popup state machines.
//!
//! The product-detail popup holds a working copy of the clicked product, so
//! quantity and observation edits never touch the catalog or the cart until
//! the draft is committed. Modeling the popups as closed enums keeps "open
//! with no selected product" unrepresentable.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A transient, uncommitted working copy of a product while its detail
/// popup is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub product: Product,
    /// User-chosen quantity, defaults to 1 on open. Not validated here; the
    /// cart store rejects zero at commit time.
    pub quantity: u32,
    pub observation: String,
}

/// Product-detail popup state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductPopup {
    #[default]
    Closed,
    Open(Draft),
}

impl ProductPopup {
    /// Open the popup for a product: a fresh draft with quantity 1 and an
    /// empty observation, regardless of any previous popup session.
    pub fn open_for(&mut self, product: &Product) {
        *self = Self::Open(Draft {
            product: product.clone(),
            quantity: 1,
            observation: String::new(),
        });
    }

    /// Set the draft quantity. No-op while closed.
    pub fn set_quantity(&mut self, quantity: u32) {
        if let Self::Open(draft) = self {
            draft.quantity = quantity;
        }
    }

    /// Replace the draft observation text. No-op while closed.
    pub fn set_observation(&mut self, observation: String) {
        if let Self::Open(draft) = self {
            draft.observation = observation;
        }
    }

    /// Close the popup and hand the draft to the caller for committing.
    /// Returns `None` if the popup was not open.
    pub fn commit(&mut self) -> Option<Draft> {
        match std::mem::take(self) {
            Self::Open(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    /// Close the popup, discarding the draft.
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// The current draft, if the popup is open.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Open(draft) => Some(draft),
            Self::Closed => None,
        }
    }

    /// Whether the popup is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Cart popup visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartPopup {
    #[default]
    Closed,
    Open,
}

impl CartPopup {
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the popup is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

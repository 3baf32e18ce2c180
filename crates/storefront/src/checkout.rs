//! Checkout state: delivery mode and the delivery address.
//!
//! The address fields are plain free text; nothing is validated here. The
//! address survives switching to pickup and back, so a user who flips the
//! selector does not lose what they typed.

use serde::{Deserialize, Serialize};

/// How the order leaves the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    #[default]
    Delivery,
    Pickup,
}

impl DeliveryMode {
    /// Wire label, as used in the order message.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivery => "delivery",
            Self::Pickup => "pickup",
        }
    }

    /// Human-facing label for the mode selector.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "Entrega",
            Self::Pickup => "Retirada",
        }
    }
}

/// A delivery address, all fields free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
}

/// Selector for a single address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Cep,
    Street,
    Number,
    Neighborhood,
}

impl Address {
    /// Overwrite exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::Cep => self.cep = value,
            AddressField::Street => self.street = value,
            AddressField::Number => self.number = value,
            AddressField::Neighborhood => self.neighborhood = value,
        }
    }
}

/// Delivery mode plus address, as edited in the cart popup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkout {
    pub delivery_mode: DeliveryMode,
    pub address: Address,
}

impl Checkout {
    /// Swap the delivery mode. Address fields are kept in case the user
    /// switches back.
    pub fn set_delivery_mode(&mut self, mode: DeliveryMode) {
        self.delivery_mode = mode;
    }
}

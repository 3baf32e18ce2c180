//! Store configuration.
//!
//! There is no environment or file-based configuration: a deployment is a
//! single store, and the defaults below describe it. `StoreConfig::new`
//! exists for tests and for embedding the engine with a different recipient.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("WhatsApp recipient id must not be empty")]
    EmptyRecipient,
    #[error("WhatsApp recipient id must be digits only, got: {0}")]
    InvalidRecipient(String),
}

/// Storefront configuration: who we are and where orders go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Title shown above the product grid.
    pub store_name: String,
    /// WhatsApp recipient id for the `wa.me` deep link (country code +
    /// number, digits only).
    pub whatsapp_recipient: String,
    /// Pickup location notice shown when the user selects pickup.
    pub pickup_notice: String,
}

impl StoreConfig {
    /// Create a configuration, validating the recipient id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the recipient id is empty or contains
    /// anything but ASCII digits.
    pub fn new(
        store_name: impl Into<String>,
        whatsapp_recipient: impl Into<String>,
        pickup_notice: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let whatsapp_recipient = whatsapp_recipient.into();
        if whatsapp_recipient.is_empty() {
            return Err(ConfigError::EmptyRecipient);
        }
        if !whatsapp_recipient.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidRecipient(whatsapp_recipient));
        }
        Ok(Self {
            store_name: store_name.into(),
            whatsapp_recipient,
            pickup_notice: pickup_notice.into(),
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Lista de Produtos".to_string(),
            whatsapp_recipient: "5511987361695".to_string(),
            pickup_notice: "R. Cel. Nogueira Padilha, 1500 - Vila Hortência, Sorocaba - SP, 18020-002"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recipient_is_valid() {
        let config = StoreConfig::default();
        let rebuilt = StoreConfig::new(
            config.store_name.clone(),
            config.whatsapp_recipient.clone(),
            config.pickup_notice.clone(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_empty_recipient_rejected() {
        let err = StoreConfig::new("Loja", "", "aviso").expect_err("rejected");
        assert_eq!(err, ConfigError::EmptyRecipient);
    }

    #[test]
    fn test_non_digit_recipient_rejected() {
        let err = StoreConfig::new("Loja", "+55 11 98736-1695", "aviso").expect_err("rejected");
        assert_eq!(
            err,
            ConfigError::InvalidRecipient("+55 11 98736-1695".to_string())
        );
    }
}

//! Unified error handling.
//!
//! Component-local errors nest into a single `AppError` so reducer callers
//! match on one type. The taxonomy is deliberately small: almost nothing in
//! this engine can fail.

use balcao_core::ProductId;
use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Configuration was invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Deep-link construction failed.
    #[error("Link error: {0}")]
    Link(#[from] url::ParseError),

    /// An action referenced a product that is not on the menu.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

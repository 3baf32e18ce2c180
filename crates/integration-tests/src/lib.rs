//! Shared helpers for Balcão integration tests.
//!
//! The scenarios in `tests/` drive the storefront reducer in-process: there
//! is no server to stand up, so a "session" is just an [`App`] value.

#![cfg_attr(not(test), forbid(unsafe_code))]

use balcao_core::ProductId;
use balcao_storefront::error::AppError;
use balcao_storefront::state::{Action, App, Effect};

/// Start a fresh session over the seeded catalog.
#[must_use]
pub fn session() -> App {
    App::default()
}

/// Drive one product through the popup into the cart.
///
/// # Errors
///
/// Propagates any reducer error.
pub fn add_product(
    app: &mut App,
    id: i32,
    quantity: u32,
    observation: &str,
) -> Result<(), AppError> {
    app.apply(Action::OpenProduct(ProductId::new(id)))?;
    app.apply(Action::SetDraftQuantity(quantity))?;
    app.apply(Action::SetDraftObservation(observation.to_string()))?;
    app.apply(Action::AddToCart)?;
    Ok(())
}

/// Submit the order and return the deep link it produced.
///
/// # Errors
///
/// Propagates any reducer error.
///
/// # Panics
///
/// Panics if the reducer yields no effect (a test failure).
pub fn submit(app: &mut App) -> Result<url::Url, AppError> {
    match app.apply(Action::SubmitOrder)? {
        Some(Effect::OpenLink(link)) => Ok(link),
        None => panic!("SubmitOrder produced no effect"),
    }
}

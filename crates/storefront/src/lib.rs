//! Balcão Storefront library.
//!
//! A headless single-session storefront: a fixed catalog, a shopping cart
//! with per-item quantity and observation notes, a delivery/pickup checkout,
//! and an order formatter that hands the finished order off as a WhatsApp
//! deep link.
//!
//! All state lives in a single [`state::App`] value and every user
//! affordance is a [`state::Action`] applied through a synchronous reducer,
//! so the whole flow is testable without a UI harness. Rendering layers
//! consume the projections in [`views`]; the only side effect the engine
//! ever requests is [`state::Effect::OpenLink`], which the caller performs.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod order;
pub mod popup;
pub mod state;
pub mod views;

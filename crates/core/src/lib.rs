//! Balcão Core - Shared types library.
//!
//! This crate provides common types used across all Balcão components:
//! - `storefront` - The headless storefront engine (catalog, cart, checkout)
//! - `integration-tests` - End-to-end order-flow scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no UI.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

//! Simple Store Core - Shared domain types.
//!
//! This crate provides the types used across all Simple Store components:
//! - `catalog` - CSV-backed product store, session cart and catalog facade
//! - `storefront` - HTTP host for browsing, cart and admin forms
//! - `cli` - Command-line tools for managing the product file
//!
//! # Architecture
//!
//! The core crate contains only types and parsing rules - no file I/O, no
//! HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids and prices, plus the
//!   [`Product`] record itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

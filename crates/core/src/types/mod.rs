//! Core types for Simple Store.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod id;
pub mod price;
pub mod product;

pub use id::{ProductId, ProductIdError};
pub use price::{Price, PriceError};
pub use product::{Product, ProductFields, QuantityError, parse_quantity};

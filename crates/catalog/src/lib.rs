//! Simple Store Catalog - the product store and everything that reads it.
//!
//! # Components
//!
//! - [`store::RecordStore`] - Durable CRUD over the product CSV file
//! - [`cart::Cart`] - Session-scoped list of product id references
//! - [`catalog::Catalog`] - Resolves cart references against the live table
//!
//! # File format
//!
//! ```text
//! Product ID,Product Name,Description,Price,Quantity,Image URL
//! P1,Widget,"Small, blue",9.99,3,https://example.com/widget.png
//! P2,Gizmo,Out for now,4.50,0,
//! ```
//!
//! Every mutation loads the whole table, edits it in memory and rewrites the
//! file through a temporary file that is renamed into place. There is no
//! locking between processes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
mod record;
pub mod store;

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::StoreError;
pub use store::RecordStore;

pub use simple_store_core::{Price, Product, ProductFields, ProductId};

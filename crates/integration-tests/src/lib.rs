//! Integration tests for Simple Store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p simple-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_store` - Record store, cart and facade against real CSV files
//! - `storefront_http` - HTTP flows through the full router, including the
//!   session cart
//!
//! Every test works in its own temporary directory; nothing needs to be
//! running.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures {
    //! Shared test data.

    use simple_store_catalog::{Catalog, RecordStore};
    use simple_store_core::{Price, Product, ProductFields, ProductId};
    use simple_store_storefront::config::StorefrontConfig;
    use simple_store_storefront::state::AppState;
    use tempfile::TempDir;

    /// Parse a product id, panicking on blank input.
    #[must_use]
    pub fn id(s: &str) -> ProductId {
        ProductId::parse(s).expect("valid product id")
    }

    /// Build a product with a generated description and no image.
    #[must_use]
    pub fn product(product_id: &str, name: &str, price: &str, quantity: u32) -> Product {
        Product::new(
            id(product_id),
            ProductFields {
                name: name.to_string(),
                description: format!("{name} description"),
                price: Price::parse(price).expect("valid price"),
                quantity,
                image_url: None,
            },
        )
    }

    /// The "Widget" product used by the walkthrough scenarios.
    #[must_use]
    pub fn widget() -> Product {
        product("P1", "Widget", "9.99", 3)
    }

    /// An initialized, empty catalog in a temporary directory.
    ///
    /// Keep the returned `TempDir` alive for as long as the catalog is used.
    #[must_use]
    pub fn temp_catalog() -> (TempDir, Catalog) {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog = Catalog::new(RecordStore::new(dir.path().join("products.csv")));
        catalog.initialize().expect("initialize product file");
        (dir, catalog)
    }

    /// Application state over an initialized, empty product file.
    #[must_use]
    pub fn temp_app_state() -> (TempDir, AppState) {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = StorefrontConfig::from_lookup(|_| None).expect("default config");
        let config = StorefrontConfig {
            products_file: dir.path().join("products.csv"),
            ..config
        };

        let state = AppState::new(config);
        state.catalog().initialize().expect("initialize product file");
        (dir, state)
    }
}

//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Health check
//!
//! # Products
//! GET  /products                    - Product listing
//! GET  /products/{id}               - Product detail
//!
//! # Cart
//! GET  /cart                        - Cart lines and total
//! POST /cart/add                    - Add to cart (in-stock products only)
//! POST /cart/remove                 - Remove one entry
//!
//! # Admin (no auth)
//! GET  /admin/products              - Current products
//! POST /admin/products              - Add product
//! POST /admin/products/{id}         - Edit product
//! POST /admin/products/{id}/delete  - Delete product
//! ```

pub mod admin;
pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(admin::index).post(admin::create))
        .route("/products/{id}", post(admin::update))
        .route("/products/{id}/delete", post(admin::delete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/admin", admin_routes())
}

//! Cart route handlers.
//!
//! The cart itself is a list of product ids stored in the session. Product
//! details are resolved against the catalog every time the cart is shown.
//!
//! Updates read, modify and write back the whole cart with no per-session
//! lock, so two concurrent adds from the same session can lose one entry.

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use simple_store_catalog::{Cart, Catalog};
use simple_store_core::Product;

use super::products::parse_id;
use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl From<&Product> for CartItemView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: usize,
}

impl CartView {
    fn from_products(products: &[Product]) -> Self {
        Self {
            items: products.iter().map(CartItemView::from).collect(),
            total: Catalog::compute_cart_total(products).display(),
            item_count: products.len(),
        }
    }
}

/// Response to an add-to-cart click.
#[derive(Debug, Clone, Serialize)]
pub struct CartUpdated {
    pub message: String,
    pub item_count: usize,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, or an empty one.
async fn get_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Store the cart in the session.
async fn set_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Resolve the cart for display.
async fn resolve(state: &AppState, cart: Cart) -> Result<CartView> {
    let products = state
        .read(move |catalog| catalog.resolve_cart_contents(&cart))
        .await?;
    Ok(CartView::from_products(&products))
}

/// Display cart.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = get_cart(&session).await?;
    Ok(Json(resolve(&state, cart).await?))
}

/// Add item to cart.
///
/// Only products that exist and are in stock can be added; the cart itself
/// does not check.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Json<CartUpdated>> {
    let id = parse_id(&form.product_id)?;

    let lookup = id.clone();
    let product = state
        .read(move |catalog| catalog.product(&lookup))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    if !product.is_in_stock() {
        return Err(AppError::BadRequest(format!("{} is out of stock", product.name)));
    }

    let mut cart = get_cart(&session).await?;
    cart.add_item(id);
    set_cart(&session, &cart).await?;

    Ok(Json(CartUpdated {
        message: format!("{} added to cart!", product.name),
        item_count: cart.len(),
    }))
}

/// Remove one entry for a product from the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Json<CartView>> {
    let id = parse_id(&form.product_id)?;

    let mut cart = get_cart(&session).await?;
    if cart.remove_item(&id) {
        set_cart(&session, &cart).await?;
    } else {
        tracing::debug!(product_id = %id, "Product not in cart");
    }

    Ok(Json(resolve(&state, cart).await?))
}

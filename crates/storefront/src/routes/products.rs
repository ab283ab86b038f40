//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use simple_store_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product card data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: u32,
    pub image_url: Option<String>,
    /// False when out of stock; the "Add to Cart" control is disabled.
    pub can_add_to_cart: bool,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            quantity: product.quantity,
            image_url: product.image_url.clone(),
            can_add_to_cart: product.is_in_stock(),
        }
    }
}

/// Parse a product id taken from the URL.
pub(crate) fn parse_id(raw: &str) -> Result<ProductId> {
    ProductId::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Display product listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>> {
    let products = state.read(|catalog| catalog.list_products()).await?;
    Ok(Json(products.iter().map(ProductView::from).collect()))
}

/// Display a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>> {
    let id = parse_id(&id)?;
    let lookup = id.clone();
    let product = state
        .read(move |catalog| catalog.product(&lookup))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductView::from(&product)))
}

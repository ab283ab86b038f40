//! Admin panel route handlers.
//!
//! Add, edit and delete product records. There is no authentication on these
//! routes; deploy the storefront where only trusted users can reach `/admin`.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use simple_store_core::{Price, Product, ProductFields, ProductId, parse_quantity};

use super::products::{ProductView, parse_id};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product fields as submitted by the add/edit forms.
#[derive(Debug, Deserialize)]
pub struct ProductFieldsForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub quantity: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TryFrom<ProductFieldsForm> for ProductFields {
    type Error = AppError;

    fn try_from(form: ProductFieldsForm) -> Result<Self> {
        let price = Price::parse(&form.price).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let quantity =
            parse_quantity(&form.quantity).map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(Self {
            name: form.name,
            description: form.description,
            price,
            quantity,
            image_url: form.image_url,
        })
    }
}

/// Add product form data.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub quantity: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl AddProductForm {
    fn into_product(self) -> Result<Product> {
        let id = ProductId::parse(&self.id).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let fields = ProductFields::try_from(ProductFieldsForm {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url,
        })?;
        Ok(Product::new(id, fields))
    }
}

/// Outcome of an edit or delete.
#[derive(Debug, Serialize)]
pub struct MutationResult {
    pub id: String,
    /// Number of rows touched; `0` when the id does not exist.
    pub matched: usize,
}

/// Current products, as stored.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.read(|catalog| catalog.list_products()).await?;
    Ok(Json(products))
}

/// Add a new product.
#[instrument(skip(state, form), fields(product_id = %form.id))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<AddProductForm>,
) -> Result<(StatusCode, Json<ProductView>)> {
    let product = form.into_product()?;
    let view = ProductView::from(&product);

    state
        .write(move |catalog| catalog.add_product(product))
        .await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// Edit an existing product.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<ProductFieldsForm>,
) -> Result<Json<MutationResult>> {
    let id = parse_id(&id)?;
    let changes = ProductFields::try_from(form)?;

    let target = id.clone();
    let matched = state
        .write(move |catalog| catalog.edit_product(&target, changes))
        .await?;

    Ok(Json(MutationResult {
        id: id.into_inner(),
        matched,
    }))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MutationResult>> {
    let id = parse_id(&id)?;

    let target = id.clone();
    let matched = state
        .write(move |catalog| catalog.delete_product(&target))
        .await?;

    Ok(Json(MutationResult {
        id: id.into_inner(),
        matched,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(price: &str, quantity: &str) -> ProductFieldsForm {
        ProductFieldsForm {
            name: "Widget".to_string(),
            description: String::new(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            image_url: Some(String::new()),
        }
    }

    #[test]
    fn test_form_coercion() {
        let fields = ProductFields::try_from(form("9.99", "3")).unwrap();
        assert_eq!(fields.price, Price::parse("9.99").unwrap());
        assert_eq!(fields.quantity, 3);
    }

    #[test]
    fn test_form_rejects_negative_price() {
        let err = ProductFields::try_from(form("-1", "3")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_form_rejects_fractional_quantity() {
        let err = ProductFields::try_from(form("1", "1.5")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}

//! Product records.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Errors that can occur when parsing a stock quantity.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input string is empty.
    #[error("quantity cannot be empty")]
    Empty,
    /// The input is not a whole, non-negative number.
    #[error("quantity must be a whole number of at least 0: {0}")]
    Invalid(String),
}

/// Parse a stock quantity.
///
/// Accepts integer text (`"3"`) and integral decimal text (`"3.0"`), which is
/// what dataframe tools write once a column has been widened to floats.
///
/// # Errors
///
/// Returns an error if the input is empty, negative, fractional or not a
/// number.
pub fn parse_quantity(s: &str) -> Result<u32, QuantityError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(QuantityError::Empty);
    }

    if let Ok(quantity) = s.parse::<u32>() {
        return Ok(quantity);
    }

    s.parse::<Decimal>()
        .ok()
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_u32())
        .ok_or_else(|| QuantityError::Invalid(s.to_owned()))
}

/// The mutable part of a product: everything except its id.
///
/// Used by the admin edit form, which may change any field but the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    /// Display label.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock; `0` means out of stock.
    pub quantity: u32,
    /// Image to show on the product card, if any.
    pub image_url: Option<String>,
}

impl ProductFields {
    /// Normalize an image URL: blank means "no image".
    #[must_use]
    pub fn normalize_image_url(url: Option<String>) -> Option<String> {
        url.filter(|u| !u.trim().is_empty())
    }
}

/// One catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Primary key, supplied by the administrator.
    pub id: ProductId,
    /// Display label.
    pub name: String,
    /// Free text description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock; `0` means out of stock.
    pub quantity: u32,
    /// Image to show on the product card, if any.
    pub image_url: Option<String>,
}

impl Product {
    /// Build a product from an id and its fields.
    #[must_use]
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
            image_url: ProductFields::normalize_image_url(fields.image_url),
        }
    }

    /// Whether at least one unit is available.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Overwrite every mutable field, keeping the id.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.quantity = fields.quantity;
        self.image_url = ProductFields::normalize_image_url(fields.image_url);
    }

    /// Copy of the mutable fields.
    #[must_use]
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
            image_url: self.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_fields() -> ProductFields {
        ProductFields {
            name: "Widget".to_string(),
            description: "A small widget".to_string(),
            price: Price::parse("9.99").unwrap(),
            quantity: 3,
            image_url: Some("https://example.com/widget.png".to_string()),
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity("3.0"), Ok(3));
        assert_eq!(parse_quantity(" 0 "), Ok(0));
        assert_eq!(parse_quantity(""), Err(QuantityError::Empty));
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("many").is_err());
    }

    #[test]
    fn test_blank_image_url_is_none() {
        let mut fields = widget_fields();
        fields.image_url = Some("   ".to_string());
        let product = Product::new(ProductId::parse("P1").unwrap(), fields);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut product = Product::new(ProductId::parse("P1").unwrap(), widget_fields());

        let mut changed = widget_fields();
        changed.name = "Gadget".to_string();
        changed.quantity = 0;
        product.apply(changed.clone());

        assert_eq!(product.id.as_str(), "P1");
        assert_eq!(product.fields(), changed);
        assert!(!product.is_in_stock());
    }
}

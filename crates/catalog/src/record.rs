//! CSV row layout of the product file.

use serde::{Deserialize, Serialize};

use simple_store_core::{Price, Product, ProductFields, ProductId, parse_quantity};

/// Header row of the product file, in column order.
pub const HEADER: [&str; 6] = [
    "Product ID",
    "Product Name",
    "Description",
    "Price",
    "Quantity",
    "Image URL",
];

/// One row as it appears on disk.
///
/// Every column is read as text and coerced afterwards so that a bad cell
/// produces a message naming the column rather than a generic serde error.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product ID")]
    id: String,
    #[serde(rename = "Product Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Price")]
    price: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Image URL", default)]
    image_url: String,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = String;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = ProductId::parse(&record.id).map_err(|e| format!("Product ID: {e}"))?;
        let price = Price::parse(&record.price).map_err(|e| format!("Price: {e}"))?;
        let quantity = parse_quantity(&record.quantity).map_err(|e| format!("Quantity: {e}"))?;

        Ok(Self::new(
            id,
            ProductFields {
                name: record.name,
                description: record.description,
                price,
                quantity,
                image_url: Some(record.image_url),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: &str, quantity: &str, image_url: &str) -> ProductRecord {
        ProductRecord {
            id: "P1".to_string(),
            name: "Widget".to_string(),
            description: "Small, blue".to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            image_url: image_url.to_string(),
        }
    }

    #[test]
    fn test_record_to_product() {
        let product = Product::try_from(record("9.99", "3", "")).unwrap();
        assert_eq!(product.id.as_str(), "P1");
        assert_eq!(product.price.to_string(), "9.99");
        assert_eq!(product.quantity, 3);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_bad_cell_names_the_column() {
        let err = Product::try_from(record("abc", "3", "")).unwrap_err();
        assert!(err.starts_with("Price:"), "{err}");

        let err = Product::try_from(record("1", "-2", "")).unwrap_err();
        assert!(err.starts_with("Quantity:"), "{err}");
    }

    #[test]
    fn test_product_to_record_leaves_missing_image_blank() {
        let product = Product::try_from(record("9.99", "3.0", "")).unwrap();
        let back = ProductRecord::from(&product);
        assert_eq!(back.quantity, "3");
        assert_eq!(back.image_url, "");
    }
}

//! Cart preview command.
//!
//! Builds a throwaway cart from the given ids, resolves it against the
//! product file and prints the lines and total, exactly as the storefront
//! cart page computes them. Ids of deleted products are skipped.

use tracing::info;

use simple_store_catalog::{Cart, Catalog};
use simple_store_core::ProductId;

/// Resolve `ids` as a cart.
///
/// # Errors
///
/// Returns an error if an id is blank or the product file is unavailable.
pub fn preview(catalog: &Catalog, ids: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let cart = ids
        .iter()
        .map(|id| ProductId::parse(id))
        .collect::<Result<Cart, _>>()?;

    let products = catalog.resolve_cart_contents(&cart)?;
    if products.is_empty() {
        info!("Your cart is empty");
        return Ok(());
    }

    for product in &products {
        info!("{} | {}", product.name, product.price.display());
    }

    let skipped = cart.len() - products.len();
    if skipped > 0 {
        info!("{skipped} item(s) no longer in the catalog were skipped");
    }

    info!("Total: {}", Catalog::compute_cart_total(&products).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use simple_store_catalog::RecordStore;
    use simple_store_core::{Price, Product, ProductFields};

    use super::*;

    #[test]
    fn test_preview() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(RecordStore::new(dir.path().join("products.csv")));
        catalog.initialize().unwrap();
        catalog
            .add_product(Product::new(
                ProductId::parse("P1").unwrap(),
                ProductFields {
                    name: "Widget".to_string(),
                    description: String::new(),
                    price: Price::parse("9.99").unwrap(),
                    quantity: 3,
                    image_url: None,
                },
            ))
            .unwrap();

        preview(&catalog, &["P1".to_string(), "gone".to_string()]).unwrap();
        assert!(preview(&catalog, &[String::new()]).is_err());
    }

    #[test]
    fn test_preview_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(RecordStore::new(dir.path().join("missing.csv")));

        assert!(preview(&catalog, &["P1".to_string()]).is_err());
    }
}

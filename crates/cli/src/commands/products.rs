//! Product file management commands.
//!
//! # Usage
//!
//! ```bash
//! store-cli --file data/products.csv init
//! store-cli list
//! store-cli show P1
//! store-cli add --id P1 -n Widget -p 9.99 -q 3 --image-url https://example.com/w.png
//! store-cli edit P1 -n Widget -p 8.99 -q 0
//! store-cli delete P1
//! ```

use tracing::{info, warn};

use simple_store_catalog::Catalog;
use simple_store_core::{Price, Product, ProductFields, ProductId, parse_quantity};

/// Raw product fields as typed on the command line.
pub struct FieldInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub image_url: Option<String>,
}

impl FieldInput {
    fn parse(self) -> Result<ProductFields, Box<dyn std::error::Error>> {
        Ok(ProductFields {
            name: self.name,
            description: self.description,
            price: Price::parse(&self.price)?,
            quantity: parse_quantity(&self.quantity)?,
            image_url: self.image_url,
        })
    }
}

fn describe(product: &Product) -> String {
    let stock = if product.is_in_stock() {
        format!("{} in stock", product.quantity)
    } else {
        "Out of Stock".to_string()
    };
    format!(
        "{} | {} | {} | {}",
        product.id,
        product.name,
        product.price.display(),
        stock
    )
}

/// Create the product file if it is missing.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn init(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let path = catalog.store().path().display();
    if catalog.initialize()? {
        info!("Created product file {path}");
    } else {
        info!("Product file {path} already exists");
    }
    Ok(())
}

/// List every product.
///
/// # Errors
///
/// Returns an error if the product file is unavailable.
pub fn list(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let products = catalog.list_products()?;
    if products.is_empty() {
        info!("No products");
        return Ok(());
    }

    for product in &products {
        info!("{}", describe(product));
    }
    info!("{} product(s)", products.len());
    Ok(())
}

/// Show one product in full.
///
/// # Errors
///
/// Returns an error if the id is blank, the product does not exist or the
/// product file is unavailable.
pub fn show(catalog: &Catalog, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let product = catalog
        .product(&id)?
        .ok_or_else(|| format!("Product not found: {id}"))?;

    info!("ID:          {}", product.id);
    info!("Name:        {}", product.name);
    info!("Description: {}", product.description);
    info!("Price:       {}", product.price.display());
    info!("Quantity:    {}", product.quantity);
    if let Some(url) = &product.image_url {
        info!("Image URL:   {url}");
    }
    Ok(())
}

/// Add a new product.
///
/// # Errors
///
/// Returns an error if a field cannot be parsed, the id already exists or
/// the product file is unavailable.
pub fn add(
    catalog: &Catalog,
    id: &str,
    fields: FieldInput,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = Product::new(ProductId::parse(id)?, fields.parse()?);
    let summary = describe(&product);

    catalog.add_product(product)?;
    info!("Product added successfully: {summary}");
    Ok(())
}

/// Replace the fields of an existing product.
///
/// # Errors
///
/// Returns an error if a field cannot be parsed or the product file is
/// unavailable. An unknown id is reported but not treated as a failure.
pub fn edit(
    catalog: &Catalog,
    id: &str,
    fields: FieldInput,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let updated = catalog.edit_product(&id, fields.parse()?)?;

    if updated == 0 {
        warn!("No product with id {id}; nothing updated");
    } else {
        info!("Product updated successfully: {id}");
    }
    Ok(())
}

/// Delete a product.
///
/// # Errors
///
/// Returns an error if the id is blank or the product file is unavailable.
/// An unknown id is reported but not treated as a failure.
pub fn delete(catalog: &Catalog, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::parse(id)?;
    let removed = catalog.delete_product(&id)?;

    if removed == 0 {
        warn!("No product with id {id}; nothing deleted");
    } else {
        info!("Product deleted successfully: {id}");
    }
    Ok(())
}

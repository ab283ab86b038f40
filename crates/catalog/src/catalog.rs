//! Catalog facade.
//!
//! Composes the [`RecordStore`] with a caller-owned [`Cart`] for the hosting
//! layers. It holds no state of its own beyond the store handle.

use std::collections::HashMap;

use tracing::instrument;

use simple_store_core::{Price, Product, ProductFields, ProductId};

use crate::cart::Cart;
use crate::error::StoreError;
use crate::store::RecordStore;

/// Entry point used by the HTTP host and the CLI.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: RecordStore,
}

impl Catalog {
    /// Create a catalog over the given store.
    #[must_use]
    pub const fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The underlying record store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Ensure the backing file exists.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::initialize`].
    pub fn initialize(&self) -> Result<bool, StoreError> {
        self.store.initialize()
    }

    /// Every product, in file order.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::load_all`].
    pub fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.store.load_all()
    }

    /// Look up one product.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::load_all`].
    pub fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.store.get(id)
    }

    /// Admin "add product" form.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::append`].
    pub fn add_product(&self, product: Product) -> Result<(), StoreError> {
        self.store.append(product)
    }

    /// Admin "delete product" form. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::delete_by_id`].
    pub fn delete_product(&self, id: &ProductId) -> Result<usize, StoreError> {
        self.store.delete_by_id(id)
    }

    /// Admin "edit product" form. Returns the number of rows updated.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::update_by_id`].
    pub fn edit_product(
        &self,
        id: &ProductId,
        changes: ProductFields,
    ) -> Result<usize, StoreError> {
        self.store.update_by_id(id, changes)
    }

    /// Resolve every cart entry against the current table.
    ///
    /// The result follows cart order, one product per entry, so an item added
    /// twice appears twice. Entries whose product has since been deleted are
    /// dropped. If the table holds the same id more than once, the first row
    /// wins.
    ///
    /// # Errors
    ///
    /// See [`RecordStore::load_all`]. An empty cart never touches the file.
    #[instrument(skip(self, cart), fields(items = cart.len()))]
    pub fn resolve_cart_contents(&self, cart: &Cart) -> Result<Vec<Product>, StoreError> {
        if cart.is_empty() {
            return Ok(Vec::new());
        }

        let products = self.store.load_all()?;
        let mut by_id: HashMap<&ProductId, &Product> = HashMap::with_capacity(products.len());
        for product in &products {
            by_id.entry(&product.id).or_insert(product);
        }

        let mut resolved = Vec::with_capacity(cart.len());
        for id in cart.list_items() {
            match by_id.get(id) {
                Some(product) => resolved.push((*product).clone()),
                None => tracing::debug!(product_id = %id, "Dropping stale cart reference"),
            }
        }
        Ok(resolved)
    }

    /// Sum of `price` over the given products.
    #[must_use]
    pub fn compute_cart_total(products: &[Product]) -> Price {
        products.iter().map(|p| p.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    fn widget() -> Product {
        Product::new(
            id("P1"),
            ProductFields {
                name: "Widget".to_string(),
                description: "A small widget".to_string(),
                price: Price::parse("9.99").unwrap(),
                quantity: 3,
                image_url: None,
            },
        )
    }

    fn catalog() -> (tempfile::TempDir, Catalog) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(RecordStore::new(dir.path().join("products.csv")));
        catalog.initialize().unwrap();
        (dir, catalog)
    }

    #[test]
    fn test_duplicate_cart_entries_resolve_twice() {
        let (_dir, catalog) = catalog();
        catalog.add_product(widget()).unwrap();

        let mut cart = Cart::new();
        cart.add_item(id("P1"));
        cart.add_item(id("P1"));

        let contents = catalog.resolve_cart_contents(&cart).unwrap();
        assert_eq!(contents, vec![widget(), widget()]);
        assert_eq!(
            Catalog::compute_cart_total(&contents),
            Price::parse("19.98").unwrap()
        );
    }

    #[test]
    fn test_stale_reference_is_dropped() {
        let (_dir, catalog) = catalog();
        catalog.add_product(widget()).unwrap();

        let cart: Cart = ["P1", "gone", "P1"].into_iter().map(id).collect();
        let contents = catalog.resolve_cart_contents(&cart).unwrap();

        assert_eq!(contents.len(), 2);
        assert!(contents.iter().all(|p| p.id == id("P1")));
    }

    #[test]
    fn test_resolution_follows_cart_order() {
        let (_dir, catalog) = catalog();
        catalog.add_product(widget()).unwrap();
        let mut gizmo = widget();
        gizmo.id = id("P2");
        gizmo.name = "Gizmo".to_string();
        catalog.add_product(gizmo).unwrap();

        let cart: Cart = ["P2", "P1"].into_iter().map(id).collect();
        let names: Vec<_> = catalog
            .resolve_cart_contents(&cart)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Gizmo", "Widget"]);
    }

    #[test]
    fn test_total_of_largest_prices_does_not_panic() {
        let (_dir, catalog) = catalog();
        let largest = "79228162514264337593543950335";
        let mut big = widget();
        big.id = id("BIG");
        big.price = Price::parse(largest).unwrap();
        catalog.add_product(big).unwrap();

        let cart: Cart = ["BIG", "BIG"].into_iter().map(id).collect();
        let contents = catalog.resolve_cart_contents(&cart).unwrap();

        assert_eq!(
            Catalog::compute_cart_total(&contents),
            Price::parse(largest).unwrap()
        );
    }

    #[test]
    fn test_empty_cart_does_not_read_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(RecordStore::new(dir.path().join("missing.csv")));

        assert!(catalog.resolve_cart_contents(&Cart::new()).unwrap().is_empty());
        assert_eq!(Catalog::compute_cart_total(&[]), Price::ZERO);
    }
}

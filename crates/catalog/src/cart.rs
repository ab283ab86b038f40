//! Session-scoped shopping cart.
//!
//! A cart is an ordered list of product id references. It never holds
//! product data; [`crate::Catalog::resolve_cart_contents`] looks the ids up
//! against the live table whenever the cart is shown.
//!
//! Each "add to cart" click appends one entry, so adding the same product
//! twice yields two entries. There is no per-line quantity.

use serde::{Deserialize, Serialize};

use simple_store_core::ProductId;

/// Ordered product id references for one session.
///
/// The cart performs no stock or existence checks; the caller decides
/// whether a product may be added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a product reference.
    pub fn add_item(&mut self, id: ProductId) {
        self.items.push(id);
    }

    /// Remove the first occurrence of `id`. Returns whether an entry was
    /// removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        match self.items.iter().position(|item| item == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn list_items(&self) -> &[ProductId] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl FromIterator<ProductId> for Cart {
    fn from_iter<T: IntoIterator<Item = ProductId>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add_item(id("P1"));
        cart.add_item(id("P2"));
        cart.add_item(id("P1"));

        assert_eq!(cart.list_items(), &[id("P1"), id("P2"), id("P1")]);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_remove_takes_first_occurrence_only() {
        let mut cart: Cart = ["P1", "P2", "P1"].into_iter().map(id).collect();

        assert!(cart.remove_item(&id("P1")));
        assert_eq!(cart.list_items(), &[id("P2"), id("P1")]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart: Cart = ["P1"].into_iter().map(id).collect();
        assert!(!cart.remove_item(&id("P9")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        for prior in [vec![], vec!["P1"], vec!["P2", "P1"], vec!["X", "X"]] {
            let original: Cart = prior.into_iter().map(id).collect();
            for x in ["P1", "P2", "X", "new"] {
                let mut cart = original.clone();
                cart.add_item(id(x));
                assert!(cart.remove_item(&id(x)));
                // Removing the first occurrence may shift which copy is kept,
                // but the sequence of ids is the same.
                assert_eq!(cart, original, "add/remove of {x} on {original:?}");
            }
        }
    }

    #[test]
    fn test_serde_is_a_plain_list() {
        let cart: Cart = ["P1", "P1"].into_iter().map(id).collect();
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"["P1","P1"]"#);
        assert_eq!(serde_json::from_str::<Cart>(&json).unwrap(), cart);
    }
}

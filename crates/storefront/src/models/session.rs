//! Session-related types.

/// Session keys for storefront data.
pub mod keys {
    /// Key for the session's cart (a list of product ids).
    pub const CART: &str = "cart";
}

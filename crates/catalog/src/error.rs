//! Errors raised by the product store.

use std::path::PathBuf;

use thiserror::Error;

use simple_store_core::ProductId;

/// Errors that can occur during store operations.
///
/// Deleting or editing an id that does not exist is not an error; those
/// calls report zero matches instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file is missing, unreadable or could not be written.
    #[error("product file {} is unavailable: {source}", .path.display())]
    Unavailable {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The header row does not match the product schema.
    #[error("product file {} has an unexpected header: {found}", .path.display())]
    SchemaMismatch {
        /// Path of the backing file.
        path: PathBuf,
        /// Header row as found in the file.
        found: String,
    },

    /// A data row could not be turned into a product.
    #[error("product file {} is corrupt at line {line}: {reason}", .path.display())]
    Corrupt {
        /// Path of the backing file.
        path: PathBuf,
        /// 1-based line number of the offending row.
        line: u64,
        /// What went wrong.
        reason: String,
    },

    /// A product with this id is already in the catalog.
    #[error("product already exists: {0}")]
    DuplicateId(ProductId),
}

impl StoreError {
    /// Whether the backing file itself is the problem (missing, unreadable,
    /// wrong structure) as opposed to a rejected request.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. } | Self::SchemaMismatch { .. } | Self::Corrupt { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::DuplicateId(ProductId::parse("P1").unwrap());
        assert_eq!(err.to_string(), "product already exists: P1");

        let err = StoreError::Corrupt {
            path: PathBuf::from("products.csv"),
            line: 3,
            reason: "price is not a number: abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "product file products.csv is corrupt at line 3: price is not a number: abc"
        );
    }

    #[test]
    fn test_is_unavailable() {
        let missing = StoreError::Unavailable {
            path: PathBuf::from("products.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(missing.is_unavailable());

        let header = StoreError::SchemaMismatch {
            path: PathBuf::from("products.csv"),
            found: "id,name".to_string(),
        };
        assert!(header.is_unavailable());

        assert!(!StoreError::DuplicateId(ProductId::parse("P1").unwrap()).is_unavailable());
    }
}

//! Record store for the product CSV file.
//!
//! The file is the single source of truth. Every operation reads the full
//! table; every mutation rewrites it. Rewrites go through a temporary file in
//! the same directory which is renamed over the target, so a crash mid-write
//! leaves the previous table intact.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::instrument;

use simple_store_core::{Product, ProductFields, ProductId};

use crate::error::StoreError;
use crate::record::{HEADER, ProductRecord};

/// Durable CRUD over the product table.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store handle for the given file. No I/O happens here.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with only a header row if it does not exist.
    ///
    /// Returns `true` when the file was created, `false` when it was already
    /// there (its contents are left untouched).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the file or its directory cannot
    /// be created.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn initialize(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            tracing::debug!("Product file already exists");
            return Ok(false);
        }

        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        self.write_all(&[])?;
        tracing::info!("Created empty product file");
        Ok(true)
    }

    /// Read every product, in file order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the file is missing or unreadable,
    /// `StoreError::SchemaMismatch` if the header row is wrong, and
    /// `StoreError::Corrupt` if a row cannot be coerced into a product.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_all(&self) -> Result<Vec<Product>, StoreError> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        if !headers.iter().eq(HEADER) {
            return Err(StoreError::SchemaMismatch {
                path: self.path.clone(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut products = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| self.csv_error(e))?;
            let line = row.position().map_or(0, csv::Position::line);

            let record: ProductRecord =
                row.deserialize(Some(&headers)).map_err(|e| StoreError::Corrupt {
                    path: self.path.clone(),
                    line,
                    reason: e.to_string(),
                })?;

            let product = Product::try_from(record).map_err(|reason| StoreError::Corrupt {
                path: self.path.clone(),
                line,
                reason,
            })?;
            products.push(product);
        }

        tracing::debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Find the first product with the given id.
    ///
    /// # Errors
    ///
    /// Returns any error from [`RecordStore::load_all`].
    pub fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|p| &p.id == id))
    }

    /// Add a product at the end of the table.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if a product with the same id is
    /// already stored, or any load/write error.
    #[instrument(
        skip(self, product),
        fields(path = %self.path.display(), product_id = %product.id)
    )]
    pub fn append(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.load_all()?;

        if products.iter().any(|p| p.id == product.id) {
            tracing::warn!("Rejected duplicate product id");
            return Err(StoreError::DuplicateId(product.id));
        }

        products.push(product);
        self.write_all(&products)?;

        tracing::info!(count = products.len(), "Product added");
        Ok(())
    }

    /// Remove every product with the given id.
    ///
    /// Returns the number of rows removed. An unknown id is a no-op and the
    /// file is not rewritten.
    ///
    /// # Errors
    ///
    /// Returns any load/write error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn delete_by_id(&self, id: &ProductId) -> Result<usize, StoreError> {
        let mut products = self.load_all()?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        let removed = before - products.len();

        if removed == 0 {
            tracing::warn!("No product to delete");
            return Ok(0);
        }

        self.write_all(&products)?;
        tracing::info!(removed, "Product deleted");
        Ok(removed)
    }

    /// Overwrite the mutable fields of every product with the given id.
    ///
    /// Returns the number of rows updated. An unknown id leaves the table
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns any load/write error.
    #[instrument(skip(self, changes), fields(path = %self.path.display()))]
    pub fn update_by_id(
        &self,
        id: &ProductId,
        changes: ProductFields,
    ) -> Result<usize, StoreError> {
        let mut products = self.load_all()?;

        let mut updated = 0;
        for product in products.iter_mut().filter(|p| &p.id == id) {
            product.apply(changes.clone());
            updated += 1;
        }

        if updated == 0 {
            tracing::warn!("No product to update");
            return Ok(0);
        }

        self.write_all(&products)?;
        tracing::info!(updated, "Product updated");
        Ok(updated)
    }

    /// Replace the file contents with the given products.
    fn write_all(&self, products: &[Product]) -> Result<(), StoreError> {
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.unavailable(e))?;

        // Keep the mode of the file being replaced.
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.unavailable(e))?;
        }

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(temp.as_file_mut());

            writer.write_record(HEADER).map_err(|e| self.csv_error(e))?;
            for product in products {
                writer
                    .serialize(ProductRecord::from(product))
                    .map_err(|e| self.csv_error(e))?;
            }
            writer.flush().map_err(|e| self.unavailable(e))?;
        }

        temp.as_file().sync_all().map_err(|e| self.unavailable(e))?;
        temp.persist(&self.path).map_err(|e| self.unavailable(e.error))?;
        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn unavailable(&self, source: std::io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, err: csv::Error) -> StoreError {
        if err.is_io_error() {
            return self.unavailable(err.into());
        }
        StoreError::Corrupt {
            path: self.path.clone(),
            line: err.position().map_or(0, csv::Position::line),
            reason: err.to_string(),
        }
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use simple_store_catalog::{Catalog, RecordStore, StoreError};

use crate::config::StorefrontConfig;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    // Serializes read-modify-rewrite cycles issued by this process.
    write_lock: Mutex<()>,
}

impl AppState {
    /// Create a new application state over the configured product file.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::new(RecordStore::new(config.products_file.clone()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Run a read-only catalog call on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Store` if the call fails, or `AppError::Internal`
    /// if the blocking task panics.
    pub async fn read<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&Catalog) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = self.inner.catalog.clone();
        tokio::task::spawn_blocking(move || f(&catalog))
            .await
            .map_err(|e| AppError::Internal(format!("catalog task failed: {e}")))?
            .map_err(AppError::from)
    }

    /// Run a mutating catalog call, one at a time per process.
    ///
    /// # Errors
    ///
    /// Same as [`AppState::read`].
    pub async fn write<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&Catalog) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.inner.write_lock.lock().await;
        self.read(f).await
    }
}

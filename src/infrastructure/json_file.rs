use crate::domain::ports::ProductSource;
use crate::domain::product::Product;
use crate::error::Result;
use crate::interfaces::json::product_reader::ProductReader;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Loads the catalog from a `products.json` asset on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProductSource {
    path: PathBuf,
}

impl JsonFileProductSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductSource for JsonFileProductSource {
    async fn load(&self) -> Result<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await?;
        ProductReader::new(bytes.as_slice()).products()
    }
}

/// Loads the catalog, degrading to an empty list on any failure.
///
/// The failure is logged and not retried; an empty catalog is a valid
/// input for the engine.
pub async fn load_or_empty(source: &dyn ProductSource) -> Vec<Product> {
    match source.load().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            products
        }
        Err(e) => {
            tracing::error!(error = %e, "error loading products");
            Vec::new()
        }
    }
}

use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// Supplies the full product list once per session.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>>;
}

pub type ProductSourceBox = Box<dyn ProductSource>;

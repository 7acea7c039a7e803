use crate::domain::ports::ProductSource;
use crate::domain::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// A product source backed by a list already in memory.
///
/// Ideal for testing or for embedding a catalog compiled into the binary.
#[derive(Default, Clone)]
pub struct InMemoryProductSource {
    products: Vec<Product>,
}

impl InMemoryProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

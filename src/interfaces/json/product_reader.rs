use crate::domain::product::Product;
use crate::error::Result;
use std::io::Read;

/// Reads a product catalog from a JSON source.
///
/// The source must hold a single JSON array of product objects, the format
/// of the site's `products.json` asset.
pub struct ProductReader<R: Read> {
    source: R,
}

impl<R: Read> ProductReader<R> {
    /// Creates a new `ProductReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the whole source. Any malformed entry fails the entire read.
    pub fn products(self) -> Result<Vec<Product>> {
        let products: Vec<Product> = serde_json::from_reader(self.source)?;
        Ok(products)
    }
}

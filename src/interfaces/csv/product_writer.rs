use crate::domain::product::{Price, Product};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ProductRow<'a> {
    id: u32,
    name: &'a str,
    category: &'a str,
    price: Price,
    in_stock: bool,
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            name: &product.name,
            category: &product.category,
            price: product.price,
            in_stock: product.in_stock,
        }
    }
}

/// Writes a catalog view as CSV with an `id,name,category,price,in_stock` header.
pub struct ProductWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ProductWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_products<'a, I>(&mut self, products: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut wrote_any = false;
        for product in products {
            self.writer.serialize(ProductRow::from(product))?;
            wrote_any = true;
        }
        // An empty view still gets its header.
        if !wrote_any {
            self.writer
                .write_record(["id", "name", "category", "price", "in_stock"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

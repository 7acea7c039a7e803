#![allow(dead_code)]

use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub const FIXTURE: &str = "tests/fixtures/products.json";

/// Writes `rows` products cycling through a few categories and prices.
pub fn generate_catalog(path: &Path, rows: u32) -> Result<(), Error> {
    let categories = ["Beds", "Sofas", "Chairs", "Tables"];
    let products: Vec<serde_json::Value> = (1..=rows)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "name": format!("Item {i}"),
                "description": format!("Catalog entry number {i}"),
                "category": categories[i as usize % categories.len()],
                "price": (i % 10) * 100,
                "inStock": i % 3 != 0,
            })
        })
        .collect();

    let mut file = File::create(path)?;
    serde_json::to_writer(&mut file, &products)?;
    file.flush()
}

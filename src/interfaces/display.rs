//! Human-readable rendering of a catalog view.

use crate::domain::product::{Price, Product};

/// Summary line shown above the product grid.
pub fn count_label(count: usize) -> String {
    match count {
        0 => "No products found".to_string(),
        1 => "Showing 1 product".to_string(),
        n => format!("Showing {n} products"),
    }
}

/// Formats a price in rupees with Indian digit grouping, e.g. `₹1,50,000`.
pub fn format_inr(price: Price) -> String {
    let text = price.value().normalize().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = group_indian(whole);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    format!("₹{grouped}")
}

// Last three digits form one group, every two digits before that another.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

pub fn stock_label(product: &Product) -> &'static str {
    if product.in_stock {
        "✓ In Stock"
    } else {
        "✗ Out of Stock"
    }
}

/// Plain-text product card: category, name, price and stock status.
pub fn render_card(product: &Product) -> String {
    format!(
        "[{}] {}\n  {}\n  {}",
        product.category,
        product.name,
        format_inr(product.price),
        stock_label(product)
    )
}

/// Shown in place of the landing-page grid when there is nothing to feature.
pub const NO_FEATURED_PRODUCTS: &str = "No products available.";

/// Renders the count label followed by one card per product.
pub fn render_cards(products: &[Product]) -> String {
    let mut out = count_label(products.len());
    append_cards(&mut out, products);
    out
}

/// Landing-page rendering: cards only, no count label.
pub fn render_featured(products: &[Product]) -> String {
    if products.is_empty() {
        return NO_FEATURED_PRODUCTS.to_string();
    }
    let mut out = String::new();
    append_cards(&mut out, products);
    out.trim_start().to_string()
}

fn append_cards(out: &mut String, products: &[Product]) {
    for product in products {
        out.push_str("\n\n");
        out.push_str(&render_card(product));
    }
}

use super::product::{Price, Product};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Value used by every "no restriction" radio option.
pub const ALL: &str = "all";

/// Category selection. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Inclusive price bounds. `min <= max` always holds for `Between`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    All,
    Between { min: Price, max: Price },
}

impl PriceRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn between(a: Price, b: Price) -> Self {
        if a <= b {
            Self::Between { min: a, max: b }
        } else {
            Self::Between { min: b, max: a }
        }
    }

    /// Parses a `"min-max"` radio value.
    ///
    /// Never fails: `"all"` and anything that is not exactly two
    /// non-negative numbers separated by `-` fall back to [`PriceRange::All`],
    /// so a bad value can never hide the whole catalog. Reversed bounds are
    /// swapped.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case(ALL) {
            return Self::All;
        }

        let mut parts = value.split('-');
        let bounds = match (parts.next(), parts.next(), parts.next()) {
            (Some(min), Some(max), None) => parse_bound(min).zip(parse_bound(max)),
            _ => None,
        };

        match bounds {
            Some((min, max)) => Self::between(min, max),
            None => {
                tracing::warn!(value, "unparseable price range, showing all prices");
                Self::All
            }
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Between { min, max } => *min <= product.price && product.price <= *max,
        }
    }
}

fn parse_bound(raw: &str) -> Option<Price> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw).ok().and_then(|v| Price::new(v).ok())
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Between { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Ordering applied to the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Name,
    /// Ascending `id`.
    #[default]
    Default,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
            Self::Default => "default",
        }
    }
}

// Unknown keys select the default ordering, like an unmatched <select> value.
impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Default,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every user-controlled selection that shapes the catalog view.
///
/// `FilterState::default()` is the cleared state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub in_stock_only: bool,
    pub search_term: String,
    pub sort_key: SortKey,
}

impl FilterState {
    /// True when `product` passes the category, price, stock and search
    /// predicates together.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product)
            && self.price_range.matches(product)
            && (!self.in_stock_only || product.in_stock)
            && self.matches_search(product)
    }

    /// A blank term matches everything. Otherwise the term is matched as
    /// typed, surrounding whitespace included.
    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search_term.trim().is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product.description.to_lowercase().contains(&term)
            || product.category.to_lowercase().contains(&term)
    }
}

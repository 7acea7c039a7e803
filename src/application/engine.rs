use crate::domain::filter::{CategoryFilter, FilterState, PriceRange, SortKey};
use crate::domain::product::Product;
use std::cmp::Ordering;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Number of products shown on the landing page.
pub const FEATURED_LIMIT: usize = 3;

/// Filters, searches and sorts `products` according to `state`.
///
/// Pure: the same inputs always produce the same ordered view.
pub fn compute_view(products: &[Product], state: &FilterState) -> Vec<Product> {
    let mut view: Vec<Product> = products
        .iter()
        .filter(|product| state.matches(product))
        .cloned()
        .collect();
    sort_products(&mut view, state.sort_key);
    view
}

/// Stable in-place sort of a view by `key`.
pub fn sort_products(view: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceLow => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => view.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Name => view.sort_by(|a, b| collate(&a.name, &b.name)),
        SortKey::Default => view.sort_by_key(|product| product.id),
    }
}

/// The first `limit` products in asset order.
pub fn featured_products(products: &[Product], limit: usize) -> &[Product] {
    &products[..limit.min(products.len())]
}

/// Locale-style string ordering: base characters first, ignoring case and
/// accents, then accents, then lowercase before uppercase.
///
/// Whitespace, punctuation and symbols weigh less than digits and letters
/// at the primary level, so `"~Bed"` sorts before `"Armchair"`.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
}

fn primary_key(s: &str) -> Vec<(bool, char)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (c.is_alphanumeric(), c))
        .collect()
}

fn secondary_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

/// Owns the loaded catalog, the active [`FilterState`] and the derived view.
///
/// The product list is immutable after construction; every state change
/// rebuilds the view from scratch.
pub struct CatalogEngine {
    products: Arc<[Product]>,
    state: FilterState,
    view: Vec<Product>,
}

impl CatalogEngine {
    /// Creates an engine in the cleared state, showing every product by id.
    pub fn new(products: impl Into<Arc<[Product]>>) -> Self {
        let products = products.into();
        let state = FilterState::default();
        let view = compute_view(&products, &state);
        Self {
            products,
            state,
            view,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Rebuilds the view from the full product list and the current state.
    pub fn apply_filters(&mut self) -> &[Product] {
        self.view = compute_view(&self.products, &self.state);
        tracing::debug!(
            total = self.products.len(),
            shown = self.view.len(),
            sort = %self.state.sort_key,
            "catalog view recomputed"
        );
        &self.view
    }

    /// Records `key` and reorders the current view without re-filtering.
    pub fn sort_products(&mut self, key: SortKey) -> &[Product] {
        self.state.sort_key = key;
        sort_products(&mut self.view, key);
        &self.view
    }

    /// Resets every selection to its default and recomputes.
    pub fn clear_filters(&mut self) -> &[Product] {
        self.state = FilterState::default();
        self.apply_filters()
    }

    pub fn select_category(&mut self, category: CategoryFilter) -> &[Product] {
        self.state.category = category;
        self.apply_filters()
    }

    pub fn select_price_range(&mut self, range: PriceRange) -> &[Product] {
        self.state.price_range = range;
        self.apply_filters()
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) -> &[Product] {
        self.state.in_stock_only = in_stock_only;
        self.apply_filters()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> &[Product] {
        self.state.search_term = term.into();
        self.apply_filters()
    }

    pub fn select_sort_key(&mut self, key: SortKey) -> &[Product] {
        self.state.sort_key = key;
        self.apply_filters()
    }

    /// Replaces the whole state at once and recomputes.
    pub fn set_state(&mut self, state: FilterState) -> &[Product] {
        self.state = state;
        self.apply_filters()
    }

    pub fn featured(&self) -> &[Product] {
        featured_products(&self.products, FEATURED_LIMIT)
    }
}

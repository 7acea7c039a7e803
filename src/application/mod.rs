//! Application layer containing the catalog filtering logic.
//!
//! [`engine::compute_view`] is the pure filter/search/sort pipeline;
//! [`engine::CatalogEngine`] wraps it with the session state that UI events
//! mutate.

pub mod engine;

use crate::domain::{Category, Product};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductSearchIntent {
    /// User typed in the search box. Starts (or restarts) the debounce
    /// window; the search itself is issued by the controller once the
    /// window elapses.
    QueryChanged(String),
    /// Secondary filter changed; re-applied to cached results without a
    /// backend call.
    CategoryChanged(Option<Category>),
    /// Query became empty; drop cached results without searching.
    Cleared,
    /// Debounce window elapsed, backend search issued.
    SearchStarted,
    SearchSucceeded(Vec<Product>),
    SearchFailed(String),
}

impl Intent for ProductSearchIntent {}

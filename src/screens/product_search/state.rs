use crate::domain::{Category, Product};
use crate::mvi::UiState;

/// Everything the search screen needs to render.
///
/// `results` is the full set returned by the last completed search;
/// `visible` is what the screen lists after the secondary category
/// filter. The filter is re-applied client-side without re-querying.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductSearchState {
    pub query: String,
    pub category: Option<Category>,
    pub results: Vec<Product>,
    pub visible: Vec<Product>,
    pub searching: bool,
    pub error: Option<String>,
}

/// Pure, re-appliable secondary filter over the cached result list.
pub fn apply_category_filter(results: &[Product], category: Option<Category>) -> Vec<Product> {
    match category {
        None => results.to_vec(),
        Some(category) => results
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    }
}

impl UiState for ProductSearchState {}

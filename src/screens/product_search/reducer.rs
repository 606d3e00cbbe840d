use crate::mvi::Reducer;
use crate::screens::product_search::intent::ProductSearchIntent;
use crate::screens::product_search::state::{apply_category_filter, ProductSearchState};

pub struct ProductSearchReducer;

impl Reducer for ProductSearchReducer {
    type State = ProductSearchState;
    type Intent = ProductSearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductSearchIntent::QueryChanged(query) => ProductSearchState { query, ..state },
            ProductSearchIntent::CategoryChanged(category) => ProductSearchState {
                visible: apply_category_filter(&state.results, category),
                category,
                ..state
            },
            ProductSearchIntent::Cleared => ProductSearchState {
                query: state.query,
                category: state.category,
                ..ProductSearchState::default()
            },
            ProductSearchIntent::SearchStarted => ProductSearchState {
                searching: true,
                error: None,
                ..state
            },
            ProductSearchIntent::SearchSucceeded(results) => ProductSearchState {
                visible: apply_category_filter(&results, state.category),
                results,
                searching: false,
                error: None,
                ..state
            },
            // Failure keeps the previous result set intact; only the
            // busy flag and the message change.
            ProductSearchIntent::SearchFailed(message) => ProductSearchState {
                searching: false,
                error: Some(message),
                ..state
            },
        }
    }
}

use crate::mvi::Reducer;
use crate::screens::product_detail::intent::ProductDetailIntent;
use crate::screens::product_detail::state::{validate_review, ProductDetailState};

pub struct ProductDetailReducer;

impl Reducer for ProductDetailReducer {
    type State = ProductDetailState;
    type Intent = ProductDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductDetailIntent::Load(_) => ProductDetailState {
                loading_product: true,
                loading_reviews: true,
                product_error: None,
                reviews_error: None,
                ..state
            },
            ProductDetailIntent::ProductLoaded(product) => ProductDetailState {
                product: Some(product),
                loading_product: false,
                product_error: None,
                ..state
            },
            ProductDetailIntent::ProductLoadFailed(message) => ProductDetailState {
                loading_product: false,
                product_error: Some(message),
                ..state
            },
            ProductDetailIntent::ReviewsLoaded(reviews) => ProductDetailState {
                reviews,
                loading_reviews: false,
                reviews_error: None,
                ..state
            },
            ProductDetailIntent::ReviewsLoadFailed(message) => ProductDetailState {
                loading_reviews: false,
                reviews_error: Some(message),
                ..state
            },
            ProductDetailIntent::RatingChanged(rating) => ProductDetailState {
                review_rating: rating,
                ..state
            },
            ProductDetailIntent::BodyChanged(body) => ProductDetailState {
                review_body: body,
                ..state
            },
            ProductDetailIntent::SubmitReview => {
                match validate_review(state.review_rating, &state.review_body) {
                    // Valid: flip the busy flag; the controller sees it
                    // and issues the backend write.
                    Ok(()) => ProductDetailState {
                        submitting_review: true,
                        review_error: None,
                        ..state
                    },
                    Err(message) => ProductDetailState {
                        review_error: Some(message),
                        ..state
                    },
                }
            }
            ProductDetailIntent::ReviewSubmitted(review) => {
                let mut reviews = state.reviews;
                reviews.push(review);
                ProductDetailState {
                    reviews,
                    submitting_review: false,
                    review_error: None,
                    review_rating: 0,
                    review_body: String::new(),
                    ..state
                }
            }
            ProductDetailIntent::ReviewSubmitFailed(message) => ProductDetailState {
                submitting_review: false,
                review_error: Some(message),
                ..state
            },
        }
    }
}

use crate::mvi::Reducer;
use crate::screens::seller_products::intent::SellerProductsIntent;
use crate::screens::seller_products::state::{ProductForm, SellerProductsState};

pub struct SellerProductsReducer;

impl Reducer for SellerProductsReducer {
    type State = SellerProductsState;
    type Intent = SellerProductsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SellerProductsIntent::StatusFilterChanged(status_filter) => SellerProductsState {
                status_filter,
                // The old filter's list is stale the moment the filter
                // changes; the new subscription's first emission refills it.
                products: Vec::new(),
                ..state
            },
            SellerProductsIntent::ProductsUpdated(products) => {
                SellerProductsState { products, ..state }
            }
            SellerProductsIntent::TitleChanged(title) => SellerProductsState {
                form: ProductForm {
                    title,
                    ..state.form
                },
                ..state
            },
            SellerProductsIntent::DescriptionChanged(description) => SellerProductsState {
                form: ProductForm {
                    description,
                    ..state.form
                },
                ..state
            },
            SellerProductsIntent::PriceChanged(price_input) => SellerProductsState {
                form: ProductForm {
                    price_input,
                    ..state.form
                },
                ..state
            },
            SellerProductsIntent::CategoryChanged(category) => SellerProductsState {
                form: ProductForm {
                    category,
                    ..state.form
                },
                ..state
            },
            SellerProductsIntent::ImagePicked(image_ref) => SellerProductsState {
                form: ProductForm {
                    image_ref,
                    ..state.form
                },
                ..state
            },
            // Submit is interpreted by the controller (validation plus
            // the effect); it changes nothing by itself.
            SellerProductsIntent::Submit => state,
            SellerProductsIntent::FormRejected(message) => SellerProductsState {
                form_error: Some(message),
                ..state
            },
            SellerProductsIntent::SaveStarted => SellerProductsState {
                saving: true,
                form_error: None,
                error: None,
                ..state
            },
            // The new listing appears through the live subscription once
            // the write propagates; only the form resets here.
            SellerProductsIntent::SaveSucceeded => SellerProductsState {
                form: ProductForm::default(),
                saving: false,
                error: None,
                ..state
            },
            SellerProductsIntent::SaveFailed(message) => SellerProductsState {
                saving: false,
                error: Some(message),
                ..state
            },
        }
    }
}

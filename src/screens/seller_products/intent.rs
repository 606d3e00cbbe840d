use crate::domain::{Category, Product, ProductStatus};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SellerProductsIntent {
    /// Status tab changed. The controller cancels the current
    /// subscription and relaunches it with the new filter.
    StatusFilterChanged(ProductStatus),
    /// Emission from the live subscription.
    ProductsUpdated(Vec<Product>),
    TitleChanged(String),
    DescriptionChanged(String),
    PriceChanged(String),
    CategoryChanged(Category),
    ImagePicked(Option<String>),
    /// User tapped save. The controller validates, then either reduces
    /// `FormRejected` or starts the upload-and-create flow.
    Submit,
    /// Local validation failed.
    FormRejected(String),
    /// Validation passed, backend write (and optional upload) issued.
    SaveStarted,
    SaveSucceeded,
    SaveFailed(String),
}

impl Intent for SellerProductsIntent {}

use crate::domain::{Category, NewProduct, Product, ProductId, ProductStatus, UserId};
use crate::mvi::UiState;

/// The create-listing form as typed, before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    /// Raw text from the price field; parsed on submit.
    pub price_input: String,
    pub category: Category,
    /// Local file reference of a picked image, if any.
    pub image_ref: Option<String>,
}

impl ProductForm {
    /// Local validation; never reaches the backend on failure.
    ///
    /// On success returns the draft to write (id minted here so the
    /// image upload can be keyed by it).
    pub fn validate(&self, seller: UserId) -> Result<NewProduct, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        let price_cents = match self.price_input.trim().parse::<u64>() {
            Ok(cents) if cents > 0 => cents,
            _ => return Err("Price must be a whole number of cents greater than zero".to_string()),
        };
        Ok(NewProduct {
            id: ProductId::generate(),
            seller_id: seller,
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            price_cents,
            category: self.category,
            image_url: None,
        })
    }
}

/// Everything the seller's listings screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerProductsState {
    /// Status the live subscription is filtered by.
    pub status_filter: ProductStatus,
    pub products: Vec<Product>,
    pub form: ProductForm,
    /// Local validation message for the form.
    pub form_error: Option<String>,
    pub saving: bool,
    /// Backend failure message for the save flow.
    pub error: Option<String>,
}

impl Default for SellerProductsState {
    fn default() -> Self {
        Self {
            status_filter: ProductStatus::Active,
            products: Vec::new(),
            form: ProductForm::default(),
            form_error: None,
            saving: false,
            error: None,
        }
    }
}

impl UiState for SellerProductsState {}

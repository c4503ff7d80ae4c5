use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be a positive integer"))]
    pub page: i32,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "Limit must be a positive integer"))]
    pub limit: i32,
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    /// Defaults to available when omitted.
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    pub id: i32,

    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub available: Option<bool>,
}

impl UpdateProductRequest {
    /// True when the patch carries no fields besides the id.
    pub fn is_empty_patch(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.available.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindOneProduct {
    #[validate(range(min = 1, message = "Product ID is required"))]
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RemoveProduct {
    #[validate(range(min = 1, message = "Product ID is required"))]
    pub id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateProducts {
    #[validate(length(min = 1, message = "At least one product ID is required"))]
    pub ids: Vec<i32>,
}

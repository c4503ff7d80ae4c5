use crate::domain::{
    requests::product::{CreateProductRequest, UpdateProductRequest},
    response::product::{DeleteProductResponse, ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError>;

    async fn update(&self, req: &UpdateProductRequest) -> Result<ProductResponse, ServiceError>;

    async fn remove(&self, id: i32) -> Result<DeleteProductResponse, ServiceError>;
}

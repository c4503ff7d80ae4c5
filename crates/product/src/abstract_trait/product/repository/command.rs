use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn insert(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;

    /// Partial field patch; absent fields keep their stored value. Never
    /// touches the id.
    async fn update_fields(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;

    /// Soft delete. The row is flagged, never erased.
    async fn mark_unavailable(&self, id: i32) -> Result<ProductModel, RepositoryError>;
}

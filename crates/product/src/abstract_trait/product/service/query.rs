use crate::domain::{
    requests::product::FindAllProducts,
    response::{page::ProductListOutcome, product::ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, req: &FindAllProducts)
    -> Result<ProductListOutcome, ServiceError>;

    async fn find_one(&self, id: i32) -> Result<ProductResponse, ServiceError>;

    /// Batch existence check over a deduplicated id set.
    async fn validate_many(&self, ids: &[i32]) -> Result<Vec<ProductResponse>, ServiceError>;
}

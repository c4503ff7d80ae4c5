use crate::{domain::requests::product::FindAllProducts, model::product::Product as ProductModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

/// Narrow read-side store seam, small enough to fake in memory.
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Page of available rows in the store's natural order.
    async fn find_page(&self, req: &FindAllProducts)
    -> Result<Vec<ProductModel>, RepositoryError>;

    async fn count_available(&self) -> Result<i64, RepositoryError>;

    /// Lookup filtered by availability; soft-deleted rows are invisible here.
    async fn find_visible_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;

    /// Raw lookup by id, availability ignored.
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;

    /// All rows whose id is in `ids`, availability ignored, natural order.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<ProductModel>, RepositoryError>;
}

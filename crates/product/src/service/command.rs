use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::{DeleteProductResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductResponse, ServiceError> {
        info!("🆕 Creating product '{}'", req.name);

        let product = self.command.insert(req).await.map_err(|e| {
            error!("❌ Failed to create product '{}': {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        Ok(ProductResponse::from(product))
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Updating product {}", req.id);

        // An empty patch degrades to the availability-filtered read, so an
        // unavailable row fails here even though a non-empty patch on the
        // same id goes through below.
        if req.is_empty_patch() {
            let product = self
                .query
                .find_visible_by_id(req.id)
                .await
                .map_err(ServiceError::Repo)?;
            return match product {
                Some(product) => Ok(ProductResponse::from(product)),
                None => Err(ServiceError::NotVisible { id: req.id }),
            };
        }

        // Raw lookup: updates apply regardless of availability.
        let existing = self
            .query
            .find_by_id(req.id)
            .await
            .map_err(ServiceError::Repo)?;
        if existing.is_none() {
            error!("❌ Product with id #{} not found", req.id);
            return Err(ServiceError::NotFound { id: req.id });
        }

        let updated = self.command.update_fields(req).await.map_err(|e| {
            error!("❌ Failed to update product {}: {e:?}", req.id);
            ServiceError::Repo(e)
        })?;

        Ok(ProductResponse::from(updated))
    }

    async fn remove(&self, id: i32) -> Result<DeleteProductResponse, ServiceError> {
        info!("🗑️ Removing product {id}");

        // Soft-delete only targets visible rows, so removing twice fails.
        let product = self
            .query
            .find_visible_by_id(id)
            .await
            .map_err(ServiceError::Repo)?;
        if product.is_none() {
            error!("❌ Product with id #{id} not found or not available");
            return Err(ServiceError::NotVisible { id });
        }

        self.command.mark_unavailable(id).await.map_err(|e| {
            error!("❌ Failed to soft-delete product {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(DeleteProductResponse::deleted())
    }
}

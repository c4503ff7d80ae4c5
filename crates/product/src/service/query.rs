use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{
            page::{PageMeta, ProductListOutcome, ProductPage},
            product::ProductResponse,
        },
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::collections::BTreeSet;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }

    fn last_page(total: i64, limit: i32) -> i64 {
        if total == 0 {
            0
        } else {
            (total + i64::from(limit) - 1) / i64::from(limit)
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ProductListOutcome, ServiceError> {
        info!("🔍 Finding products | page: {}, limit: {}", req.page, req.limit);

        let total = self.query.count_available().await.map_err(|e| {
            error!("❌ Failed to count available products: {e:?}");
            ServiceError::Repo(e)
        })?;

        let last_page = Self::last_page(total, req.limit);

        if i64::from(req.page) > last_page {
            info!("⚠️ Page {} is out of range (last page: {last_page})", req.page);
            return Ok(ProductListOutcome::PageOutOfRange {
                page: req.page,
                last_page,
            });
        }

        let products = self.query.find_page(req).await.map_err(|e| {
            error!("❌ Failed to fetch product page: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products (total: {total})", data.len());

        Ok(ProductListOutcome::Page(ProductPage {
            data,
            meta: PageMeta {
                page: req.page,
                total,
                last_page,
            },
        }))
    }

    async fn find_one(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product {id}");

        let product = self
            .query
            .find_visible_by_id(id)
            .await
            .map_err(ServiceError::Repo)?;

        match product {
            Some(product) => Ok(ProductResponse::from(product)),
            None => {
                error!("❌ Product with id #{id} not found or not available");
                Err(ServiceError::NotVisible { id })
            }
        }
    }

    async fn validate_many(&self, ids: &[i32]) -> Result<Vec<ProductResponse>, ServiceError> {
        // Set semantics; duplicates in the request count once.
        let unique: Vec<i32> = ids.iter().copied().collect::<BTreeSet<i32>>().into_iter().collect();

        info!("🔎 Validating {} unique product IDs", unique.len());

        let products = self
            .query
            .find_by_ids(&unique)
            .await
            .map_err(ServiceError::Repo)?;

        if products.len() != unique.len() {
            let found: BTreeSet<i32> = products.iter().map(|p| p.product_id).collect();
            let missing: Vec<i32> = unique
                .into_iter()
                .filter(|id| !found.contains(id))
                .collect();
            error!("❌ Some products do not exist: {missing:?}");
            return Err(ServiceError::MissingProducts { ids: missing });
        }

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fake::InMemoryProductStore;
    use std::sync::Arc;

    fn service_over(store: Arc<InMemoryProductStore>) -> ProductQueryService {
        ProductQueryService::new(store)
    }

    fn page_req(page: i32, limit: i32) -> FindAllProducts {
        FindAllProducts { page, limit }
    }

    #[tokio::test]
    async fn paginates_available_products() {
        let store = Arc::new(InMemoryProductStore::new());
        store.seed(25);
        let service = service_over(store);

        let outcome = service.find_all(&page_req(1, 10)).await.unwrap();
        let page = outcome.page().expect("page 1 should be in range");
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.meta.page, 1);

        let outcome = service.find_all(&page_req(3, 10)).await.unwrap();
        assert_eq!(outcome.page().unwrap().data.len(), 5);
    }

    #[tokio::test]
    async fn page_past_the_end_is_a_soft_failure() {
        let store = Arc::new(InMemoryProductStore::new());
        store.seed(25);
        let service = service_over(store);

        let outcome = service.find_all(&page_req(4, 10)).await.unwrap();
        assert!(outcome.is_out_of_range());
    }

    #[tokio::test]
    async fn empty_catalog_rejects_any_page_softly() {
        let store = Arc::new(InMemoryProductStore::new());
        let service = service_over(store);

        let outcome = service.find_all(&page_req(1, 10)).await.unwrap();
        match outcome {
            ProductListOutcome::PageOutOfRange { page, last_page } => {
                assert_eq!(page, 1);
                assert_eq!(last_page, 0);
            }
            ProductListOutcome::Page(_) => panic!("expected out-of-range outcome"),
        }
    }

    #[tokio::test]
    async fn concatenated_pages_cover_every_product_once() {
        let store = Arc::new(InMemoryProductStore::new());
        store.seed(25);
        let service = service_over(store);

        let mut seen = Vec::new();
        for page in 1..=3 {
            let outcome = service.find_all(&page_req(page, 10)).await.unwrap();
            let body = outcome.page().unwrap();
            assert!(body.data.len() <= 10);
            seen.extend(body.data.iter().map(|p| p.id));
        }

        let mut deduped = seen.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(seen.len(), 25);
        assert_eq!(deduped.len(), 25);
    }

    #[tokio::test]
    async fn soft_deleted_products_are_excluded_from_listing() {
        let store = Arc::new(InMemoryProductStore::new());
        store.seed(5);
        store.push("hidden", 1.0, false);
        let service = service_over(store);

        let outcome = service.find_all(&page_req(1, 10)).await.unwrap();
        let page = outcome.page().unwrap();
        assert_eq!(page.meta.total, 5);
        assert!(page.data.iter().all(|p| p.available));
    }

    #[tokio::test]
    async fn find_one_returns_available_product() {
        let store = Arc::new(InMemoryProductStore::new());
        let inserted = store.push("keyboard", 49.0, true);
        let service = service_over(store);

        let found = service.find_one(inserted.product_id).await.unwrap();
        assert_eq!(found.id, inserted.product_id);
        assert_eq!(found.name, "keyboard");
    }

    #[tokio::test]
    async fn find_one_hides_unavailable_product() {
        let store = Arc::new(InMemoryProductStore::new());
        let inserted = store.push("retired", 5.0, false);
        let service = service_over(store);

        let err = service.find_one(inserted.product_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotVisible { id } if id == inserted.product_id));
    }

    #[tokio::test]
    async fn validate_many_dedupes_and_reports_missing_ids() {
        let store = Arc::new(InMemoryProductStore::new());
        store.seed(2);
        let service = service_over(store);

        let err = service.validate_many(&[1, 2, 2, 3]).await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingProducts { ref ids } if ids == &vec![3]));

        let found = service.validate_many(&[1, 2]).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn validate_many_checks_existence_not_availability() {
        let store = Arc::new(InMemoryProductStore::new());
        store.push("live", 1.0, true);
        store.push("retired", 2.0, false);
        let service = service_over(store);

        let found = service.validate_many(&[1, 2]).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(ProductQueryService::last_page(0, 10), 0);
        assert_eq!(ProductQueryService::last_page(1, 10), 1);
        assert_eq!(ProductQueryService::last_page(10, 10), 1);
        assert_eq!(ProductQueryService::last_page(11, 10), 2);
        assert_eq!(ProductQueryService::last_page(25, 10), 3);
    }
}

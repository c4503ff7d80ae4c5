use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    model::product::{Product, ProductStatus},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Mutex;

#[derive(Default)]
struct State {
    rows: Vec<Product>,
    next_id: i32,
}

/// In-memory stand-in for the Postgres repositories, insertion-ordered like
/// the real store's natural order.
pub struct InMemoryProductStore {
    state: Mutex<State>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn push(&self, name: &str, price: f64, available: bool) -> Product {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let product = Product {
            product_id: id,
            name: name.to_string(),
            price,
            status: ProductStatus::from(available),
            created_at: None,
            updated_at: None,
        };
        state.rows.push(product.clone());
        product
    }

    pub fn seed(&self, count: i32) {
        for n in 1..=count {
            self.push(&format!("product-{n}"), f64::from(n), true);
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductStore {
    async fn find_page(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let offset = ((req.page - 1).max(0) * req.limit) as usize;
        Ok(state
            .rows
            .iter()
            .filter(|p| p.status.is_visible())
            .skip(offset)
            .take(req.limit as usize)
            .cloned()
            .collect())
    }

    async fn count_available(&self) -> Result<i64, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().filter(|p| p.status.is_visible()).count() as i64)
    }

    async fn find_visible_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .find(|p| p.product_id == id && p.status.is_visible())
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|p| p.product_id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .iter()
            .filter(|p| ids.contains(&p.product_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductStore {
    async fn insert(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        Ok(self.push(&req.name, req.price, req.available.unwrap_or(true)))
    }

    async fn update_fields(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let row = state
            .rows
            .iter_mut()
            .find(|p| p.product_id == req.id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(name) = &req.name {
            row.name = name.clone();
        }
        if let Some(price) = req.price {
            row.price = price;
        }
        if let Some(available) = req.available {
            row.status = ProductStatus::from(available);
        }
        Ok(row.clone())
    }

    async fn mark_unavailable(&self, id: i32) -> Result<Product, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let row = state
            .rows
            .iter_mut()
            .find(|p| p.product_id == id)
            .ok_or(RepositoryError::NotFound)?;
        row.status = row.status.retire();
        Ok(row.clone())
    }
}

use super::{decode, encode};
use crate::{
    abstract_trait::product::service::DynProductQueryService,
    domain::{
        requests::product::{FindAllProducts, FindOneProduct, ValidateProducts},
        response::page::{PageTooHigh, ProductListOutcome},
    },
};
use shared::errors::RpcErrorBody;

#[derive(Clone)]
pub struct ProductQueryHandler {
    service: DynProductQueryService,
}

impl ProductQueryHandler {
    pub fn new(service: DynProductQueryService) -> Self {
        Self { service }
    }

    pub async fn find_all(&self, payload: &[u8]) -> Result<Vec<u8>, RpcErrorBody> {
        let req: FindAllProducts = decode(payload)?;

        let outcome = self
            .service
            .find_all(&req)
            .await
            .map_err(|e| RpcErrorBody::from(&e))?;

        match outcome {
            ProductListOutcome::Page(page) => encode(&page),
            ProductListOutcome::PageOutOfRange { .. } => encode(&PageTooHigh::new()),
        }
    }

    pub async fn find_one(&self, payload: &[u8]) -> Result<Vec<u8>, RpcErrorBody> {
        let req: FindOneProduct = decode(payload)?;

        let product = self
            .service
            .find_one(req.id)
            .await
            .map_err(|e| RpcErrorBody::from(&e))?;

        encode(&product)
    }

    pub async fn validate(&self, payload: &[u8]) -> Result<Vec<u8>, RpcErrorBody> {
        let req: ValidateProducts = decode(payload)?;

        let products = self
            .service
            .validate_many(&req.ids)
            .await
            .map_err(|e| RpcErrorBody::from(&e))?;

        encode(&products)
    }
}

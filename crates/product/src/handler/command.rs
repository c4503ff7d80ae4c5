use super::{decode, encode};
use crate::{
    abstract_trait::product::service::DynProductCommandService,
    domain::requests::product::{CreateProductRequest, RemoveProduct, UpdateProductRequest},
};
use shared::errors::RpcErrorBody;

#[derive(Clone)]
pub struct ProductCommandHandler {
    service: DynProductCommandService,
}

impl ProductCommandHandler {
    pub fn new(service: DynProductCommandService) -> Self {
        Self { service }
    }

    pub async fn create(&self, payload: &[u8]) -> Result<Vec<u8>, RpcErrorBody> {
        let req: CreateProductRequest = decode(payload)?;

        let product = self
            .service
            .create(&req)
            .await
            .map_err(|e| RpcErrorBody::from(&e))?;

        encode(&product)
    }

    pub async fn update(&self, payload: &[u8]) -> Result<Vec<u8>, RpcErrorBody> {
        let req: UpdateProductRequest = decode(payload)?;

        let product = self
            .service
            .update(&req)
            .await
            .map_err(|e| RpcErrorBody::from(&e))?;

        encode(&product)
    }

    pub async fn remove(&self, payload: &[u8]) -> Result<Vec<u8>, RpcErrorBody> {
        let req: RemoveProduct = decode(payload)?;

        let confirmation = self
            .service
            .remove(req.id)
            .await
            .map_err(|e| RpcErrorBody::from(&e))?;

        encode(&confirmation)
    }
}

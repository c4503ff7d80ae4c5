mod command;
mod query;

pub use self::command::ProductCommandHandler;
pub use self::query::ProductQueryHandler;

use serde::{Serialize, de::DeserializeOwned};
use shared::errors::RpcErrorBody;
use tracing::error;
use validator::Validate;

/// Queue group shared by every instance of this service.
pub const QUEUE_GROUP: &str = "product-service";

/// One subject per catalog operation.
pub mod subject {
    pub const CREATE_PRODUCT: &str = "create_product";
    pub const FIND_ALL_PRODUCTS: &str = "find_all_products";
    pub const FIND_ONE_PRODUCT: &str = "find_one_product";
    pub const UPDATE_PRODUCT: &str = "update_product";
    pub const REMOVE_PRODUCT: &str = "remove_product";
    pub const VALIDATE_PRODUCTS: &str = "validate_products";

    pub const ALL: [&str; 6] = [
        CREATE_PRODUCT,
        FIND_ALL_PRODUCTS,
        FIND_ONE_PRODUCT,
        UPDATE_PRODUCT,
        REMOVE_PRODUCT,
        VALIDATE_PRODUCTS,
    ];
}

/// Routes an incoming request to the matching handler and always produces
/// reply bytes; failures become an `RpcErrorBody` instead of a dropped
/// message.
#[derive(Clone)]
pub struct ProductRpcRouter {
    query: ProductQueryHandler,
    command: ProductCommandHandler,
}

impl ProductRpcRouter {
    pub fn new(query: ProductQueryHandler, command: ProductCommandHandler) -> Self {
        Self { query, command }
    }

    pub async fn dispatch(&self, subject: &str, payload: &[u8]) -> Vec<u8> {
        let result = match subject {
            subject::CREATE_PRODUCT => self.command.create(payload).await,
            subject::FIND_ALL_PRODUCTS => self.query.find_all(payload).await,
            subject::FIND_ONE_PRODUCT => self.query.find_one(payload).await,
            subject::UPDATE_PRODUCT => self.command.update(payload).await,
            subject::REMOVE_PRODUCT => self.command.remove(payload).await,
            subject::VALIDATE_PRODUCTS => self.query.validate(payload).await,
            other => Err(RpcErrorBody::bad_request(format!(
                "Unknown subject: {other}"
            ))),
        };

        match result {
            Ok(reply) => reply,
            Err(body) => serde_json::to_vec(&body).unwrap_or_else(|e| {
                error!("❌ Failed to encode error reply: {e}");
                br#"{"status":500,"message":"Internal server error"}"#.to_vec()
            }),
        }
    }
}

/// Decodes and shape-validates a request before the core logic runs.
pub(crate) fn decode<T: DeserializeOwned + Validate>(payload: &[u8]) -> Result<T, RpcErrorBody> {
    let req: T = serde_json::from_slice(payload)
        .map_err(|e| RpcErrorBody::bad_request(format!("Malformed request payload: {e}")))?;
    req.validate()
        .map_err(|e| RpcErrorBody::bad_request(format!("Validation failed: {e}")))?;
    Ok(req)
}

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, RpcErrorBody> {
    serde_json::to_vec(value).map_err(|e| {
        error!("❌ Failed to encode reply: {e}");
        RpcErrorBody::internal()
    })
}

mod repository;
mod rpc;
mod service;

pub use self::repository::RepositoryError;
pub use self::rpc::RpcErrorBody;
pub use self::service::ServiceError;

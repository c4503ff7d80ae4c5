use crate::{
    abstract_trait::product::repository::{DynProductCommandRepository, DynProductQueryRepository},
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
    service::{command::ProductCommandService, query::ProductQueryService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: ProductQueryService,
    pub product_command: ProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool));

        Self::with_repositories(query_repo, command_repo)
    }

    /// Wires the services over arbitrary repository implementations; tests
    /// pass an in-memory store here.
    pub fn with_repositories(
        query_repo: DynProductQueryRepository,
        command_repo: DynProductCommandRepository,
    ) -> Self {
        let product_query = ProductQueryService::new(query_repo.clone());
        let product_command = ProductCommandService::new(query_repo, command_repo);

        Self {
            product_query,
            product_command,
        }
    }
}

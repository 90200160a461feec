use std::sync::Arc;

use crate::modules::access::Authorizer;
use crate::modules::catalog::application::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub authorizer: Arc<dyn Authorizer>,
}

impl AppState {
    pub fn new(catalog: CatalogService, authorizer: impl Authorizer + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
            authorizer: Arc::new(authorizer),
        }
    }
}

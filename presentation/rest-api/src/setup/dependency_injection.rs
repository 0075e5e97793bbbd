use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::service::ProductServiceImpl;
use business::domain::product::service::ProductService;

use crate::api::app::routes::AppApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub app_api: AppApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(app_name: &str, pool: sqlx::PgPool) -> Self {
        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));

        let product_service = Arc::new(ProductServiceImpl {
            repository: product_repository,
            logger: Arc::new(TracingLogger::new("product_service")),
        });

        Self::with_product_service(app_name, product_service)
    }

    /// Wires the HTTP layer around an already-built product service.
    pub fn with_product_service(app_name: &str, product_service: Arc<dyn ProductService>) -> Self {
        Self {
            app_api: AppApi::new(app_name),
            product_api: ProductApi::new(product_service),
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::service::{
    CreateProductParams, ProductService, RemoveOutcome, UpdateProductParams,
};
use crate::domain::product::value_objects::ProductId;

pub struct ProductServiceImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock.unwrap_or(0),
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }

    async fn find_one(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.logger.info(&format!("Fetching product by id: {}", id));

        self.repository
            .get_by_id(id)
            .await
            .map_err(ProductError::from_lookup)
    }

    async fn update(
        &self,
        id: &ProductId,
        params: UpdateProductParams,
    ) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", id));

        let existing = self
            .repository
            .get_by_id(id)
            .await
            .map_err(ProductError::from_lookup)?;

        let updated = existing.with_changes(
            params.name,
            params.description,
            params.price,
            params.stock,
        )?;

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }

    async fn remove(&self, id: &ProductId) -> Result<RemoveOutcome, ProductError> {
        self.logger.info(&format!("Deleting product: {}", id));

        // Verify product exists before deleting
        self.repository
            .get_by_id(id)
            .await
            .map_err(ProductError::from_lookup)?;

        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            self.logger
                .warn(&format!("Product {} vanished before delete", id));
        } else {
            self.logger.info(&format!("Product deleted: {}", id));
        }

        Ok(RemoveOutcome { affected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_product(id: &str, name: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            Some("Stored description".to_string()),
            12.5,
            4,
            now,
            now,
        )
    }

    fn service(repo: MockProductRepo) -> ProductServiceImpl {
        ProductServiceImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_create_product_when_params_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|p| p.name == "Widget" && p.stock == 0)
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock_repo)
            .create(CreateProductParams {
                name: "Widget".to_string(),
                description: None,
                price: 3.0,
                stock: None,
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 3.0);
        assert_eq!(product.stock, 0);
    }

    #[tokio::test]
    async fn should_not_save_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let result = service(mock_repo)
            .create(CreateProductParams {
                name: "".to_string(),
                description: None,
                price: 1.0,
                stock: Some(1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_surface_repository_failure_when_save_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = service(mock_repo)
            .create(CreateProductParams {
                name: "Widget".to_string(),
                description: None,
                price: 1.0,
                stock: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_return_products_in_repository_order() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                stored_product("b", "Newer"),
                stored_product("a", "Older"),
            ])
        });

        let products = service(mock_repo).find_all().await.unwrap();

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Newer", "Older"]);
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| id.as_str() == "p-1")
            .returning(|id| Ok(stored_product(id.as_str(), "Widget")));

        let product = service(mock_repo)
            .find_one(&ProductId::new("p-1"))
            .await
            .unwrap();

        assert_eq!(product.id.as_str(), "p-1");
        assert_eq!(product.name, "Widget");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = service(mock_repo)
            .find_one(&ProductId::new("missing"))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_merge_partial_update_into_existing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id.as_str(), "Widget")));
        mock_repo
            .expect_save()
            .withf(|p| p.name == "Gadget" && p.price == 12.5 && p.stock == 4)
            .times(1)
            .returning(|_| Ok(()));

        let updated = service(mock_repo)
            .update(
                &ProductId::new("p-1"),
                UpdateProductParams {
                    name: Some("Gadget".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id.as_str(), "p-1");
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.description.as_deref(), Some("Stored description"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let result = service(mock_repo)
            .update(&ProductId::new("missing"), UpdateProductParams::default())
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_when_price_negative() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id.as_str(), "Widget")));
        mock_repo.expect_save().never();

        let result = service(mock_repo)
            .update(
                &ProductId::new("p-1"),
                UpdateProductParams {
                    price: Some(-1.0),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceInvalid));
    }

    #[tokio::test]
    async fn should_report_affected_rows_when_removing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_product(id.as_str(), "Widget")));
        mock_repo.expect_delete().times(1).returning(|_| Ok(1));

        let outcome = service(mock_repo)
            .remove(&ProductId::new("p-1"))
            .await
            .unwrap();

        assert_eq!(outcome, RemoveOutcome { affected: 1 });
    }

    #[tokio::test]
    async fn should_return_not_found_when_removing_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let result = service(mock_repo)
            .remove(&ProductId::new("missing"))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_database_errors_distinct_from_not_found() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = service(mock_repo)
            .find_one(&ProductId::new("p-1"))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}

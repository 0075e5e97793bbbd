use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product, newest first.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Inserts the product or overwrites the stored one with the same id.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: &ProductId) -> Result<u64, RepositoryError>;
}

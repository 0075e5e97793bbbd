use async_trait::async_trait;

use super::errors::ProductError;
use super::model::Product;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<i32>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

/// What the store reported after a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub affected: u64,
}

/// Service port behind the product endpoints.
///
/// Owns the lifecycle of products: the HTTP layer only relays ids and
/// request bodies to it and relays the results back.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn create(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    async fn find_all(&self) -> Result<Vec<Product>, ProductError>;
    async fn find_one(&self, id: &ProductId) -> Result<Product, ProductError>;
    async fn update(
        &self,
        id: &ProductId,
        params: UpdateProductParams,
    ) -> Result<Product, ProductError>;
    async fn remove(&self, id: &ProductId) -> Result<RemoveOutcome, ProductError>;
}

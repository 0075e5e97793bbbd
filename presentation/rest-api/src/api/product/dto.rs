use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::service::{
    CreateProductParams, RemoveOutcome, UpdateProductParams,
};

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: String,
    /// Free-text description
    #[oai(validator(max_length = 2000), skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price (non-negative, at most 9999999999.99)
    #[oai(validator(minimum(value = "0"), maximum(value = "9999999999.99")))]
    pub price: f64,
    /// Units in stock (defaults to 0)
    #[oai(validator(minimum(value = "0")), skip_serializing_if_is_none)]
    pub stock: Option<i32>,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
        }
    }
}

/// Partial update. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateProductRequest {
    /// New product name
    #[oai(validator(min_length = 1, max_length = 255), skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New description
    #[oai(validator(max_length = 2000), skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// New unit price
    #[oai(
        validator(minimum(value = "0"), maximum(value = "9999999999.99")),
        skip_serializing_if_is_none
    )]
    pub price: Option<f64>,
    /// New stock level
    #[oai(validator(minimum(value = "0")), skip_serializing_if_is_none)]
    pub stock: Option<i32>,
}

impl From<UpdateProductRequest> for UpdateProductParams {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock: req.stock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Acknowledgment returned after a delete.
#[derive(Debug, Clone, Object)]
pub struct DeletedResponse {
    /// Whether a product was removed
    pub deleted: bool,
}

impl From<RemoveOutcome> for DeletedResponse {
    fn from(outcome: RemoveOutcome) -> Self {
        Self {
            deleted: outcome.affected > 0,
        }
    }
}

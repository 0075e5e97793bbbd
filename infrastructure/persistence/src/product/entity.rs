use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Scale of the `price` column.
const PRICE_SCALE: i64 = 2;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::Persistence)?;

        Ok(Product::from_repository(
            ProductId::from(self.id),
            self.name,
            self.description,
            price,
            self.stock,
            self.created_at,
            self.updated_at,
        ))
    }

    pub fn from_domain(product: &Product) -> Result<Self, RepositoryError> {
        let id = parse_id(&product.id).ok_or(RepositoryError::Persistence)?;
        let price = BigDecimal::from_f64(product.price)
            .ok_or(RepositoryError::Persistence)?
            .round(PRICE_SCALE);

        Ok(Self {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

/// Product ids are stored as UUIDs; anything else cannot match a row.
pub fn parse_id(id: &ProductId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

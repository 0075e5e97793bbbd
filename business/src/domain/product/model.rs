use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::ProductId;

pub const NAME_MAX_LENGTH: usize = 255;
/// Largest price the `NUMERIC(12,2)` column can hold.
pub const PRICE_MAX: f64 = 9_999_999_999.99;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let price = validate(&props.name, props.price, props.stock)?;

        let now = Utc::now();
        Ok(Self {
            id: ProductId::generate(),
            name: props.name,
            description: props.description,
            price,
            stock: props.stock,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: Option<String>,
        price: f64,
        stock: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            stock,
            created_at,
            updated_at,
        }
    }

    /// Applies a partial change set. Absent fields keep their current value;
    /// identity and creation time never change.
    pub fn with_changes(
        self,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
        stock: Option<i32>,
    ) -> Result<Self, ProductError> {
        let name = name.unwrap_or(self.name);
        let description = description.or(self.description);
        let price = price.unwrap_or(self.price);
        let stock = stock.unwrap_or(self.stock);

        let price = validate(&name, price, stock)?;

        Ok(Self {
            id: self.id,
            name,
            description,
            price,
            stock,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

/// Checks the product fields and returns the price rounded to cents, which is
/// the value the store keeps.
fn validate(name: &str, price: f64, stock: i32) -> Result<f64, ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(ProductError::NameTooLong);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::PriceInvalid);
    }
    let price = round_to_cents(price);
    if price > PRICE_MAX {
        return Err(ProductError::PriceInvalid);
    }
    if stock < 0 {
        return Err(ProductError::StockInvalid);
    }
    Ok(price)
}

fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

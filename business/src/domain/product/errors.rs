#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.stock_invalid")]
    StockInvalid,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Lifts a repository error, keeping "not found" as a product-level condition.
    pub fn from_lookup(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}

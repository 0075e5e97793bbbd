use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::{ProductEntity, parse_id};

const SELECT_COLUMNS: &str =
    "SELECT id, name, description, price, stock, created_at, updated_at FROM products";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_COLUMNS} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {e}");
            RepositoryError::DatabaseError
        })?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let uuid = parse_id(id).ok_or(RepositoryError::NotFound)?;

        let entity =
            sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch product {id}: {e}");
                    RepositoryError::DatabaseError
                })?
                .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, stock, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                stock = EXCLUDED.stock,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(&entity.price)
        .bind(entity.stock)
        .bind(entity.created_at)
        .bind(entity.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save product {}: {e}", product.id);
            RepositoryError::DatabaseError
        })?;

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<u64, RepositoryError> {
        let Some(uuid) = parse_id(id) else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {id}: {e}");
                RepositoryError::DatabaseError
            })?;

        Ok(result.rows_affected())
    }
}

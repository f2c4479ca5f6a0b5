use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::category::models::CategoryId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::Quantity;
use crate::domain::product::ports::ProductRepository;

const PRODUCT_COLUMNS: &str =
    "id, name, shortdescription, description, price, created, updated, quantity, category_id";

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    shortdescription: String,
    description: String,
    price: f64,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    quantity: i64,
    category_id: i64,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId(row.id),
            name: ProductName::new(row.name)?,
            short_description: row.shortdescription,
            description: row.description,
            price: Price::new(row.price)?,
            created: row.created,
            updated: row.updated,
            quantity: Quantity::new(row.quantity)?,
            category_id: CategoryId(row.category_id),
        })
    }
}

fn map_write_error(e: sqlx::Error, details: &ProductDetails) -> ProductError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_foreign_key_violation() => {
            ProductError::UnknownCategory(details.category_id.to_string())
        }
        _ => ProductError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, details: &ProductDetails) -> Result<Product, ProductError> {
        let sql = format!(
            r#"
            INSERT INTO products (name, shortdescription, description, price, created, updated, quantity, category_id)
            VALUES ($1, $2, $3, $4, NOW(), NOW(), $5, $6)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(details.name.as_str())
            .bind(&details.short_description)
            .bind(&details.description)
            .bind(details.price.value())
            .bind(details.quantity.value())
            .bind(details.category_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, details))?;

        Product::try_from(row)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?
            .map(Product::try_from)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn update(&self, id: &ProductId, details: &ProductDetails) -> Result<u64, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, shortdescription = $3, description = $4, price = $5,
                updated = NOW(), quantity = $6, category_id = $7
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(details.name.as_str())
        .bind(&details.short_description)
        .bind(&details.description)
        .bind(details.price.value())
        .bind(details.quantity.value())
        .bind(details.category_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, details))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &ProductId) -> Result<u64, ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::ports::CategoryRepository;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    category_id: i64,
    category_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CategoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId(row.category_id),
            name: CategoryName::new(row.category_name)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, name: &CategoryName) -> Result<Category, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (category_name, created_at, updated_at)
            VALUES ($1, NOW(), NOW())
            RETURNING category_id, category_name, created_at, updated_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Category::try_from(row)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, CategoryError> {
        sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, category_name, created_at, updated_at
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?
        .map(Category::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, category_name, created_at, updated_at
            FROM categories
            ORDER BY category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn update(&self, id: &CategoryId, name: &CategoryName) -> Result<u64, CategoryError> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET category_name = $2, updated_at = NOW()
            WHERE category_id = $1
            "#,
        )
        .bind(id.0)
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &CategoryId) -> Result<u64, CategoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => {
                CategoryError::InUse(id.to_string())
            }
            _ => CategoryError::DatabaseError(e.to_string()),
        })?;

        Ok(result.rows_affected())
    }
}

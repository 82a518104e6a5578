use sqlx::{PgPool, Row};
use trivia_core::{Category, CategoryId, Result};

pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every category ordered by id
    pub async fn list(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_category).collect())
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_category))
    }
}

fn row_to_category(row: sqlx::postgres::PgRow) -> Category {
    let id: i64 = row.get("id");
    let kind: String = row.get("type");

    Category {
        id: CategoryId(id),
        kind,
    }
}

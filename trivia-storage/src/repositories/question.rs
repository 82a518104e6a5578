use sqlx::{PgPool, Postgres, Row, Transaction};
use trivia_core::{CategoryId, NewQuestion, Question, QuestionId, Result};

pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a question inside its own transaction
    pub async fn create(&self, question: &NewQuestion) -> Result<Question> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category.as_i64())
        .bind(question.difficulty)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(row) => {
                tx.commit().await?;
                Ok(row_to_question(row))
            }
            Err(err) => {
                rollback(tx, "insert question").await;
                Err(err.into())
            }
        }
    }

    /// Get question by ID
    pub async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        let row = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_question))
    }

    /// Delete a question, reporting whether a row was removed
    pub async fn delete(&self, id: QuestionId) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await;

        match deleted {
            Ok(done) => {
                tx.commit().await?;
                Ok(done.rows_affected() > 0)
            }
            Err(err) => {
                rollback(tx, "delete question").await;
                Err(err.into())
            }
        }
    }

    /// List all questions ordered by id
    pub async fn list(&self) -> Result<Vec<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_question).collect())
    }

    /// Filter by category
    pub async fn filter_by_category(&self, category: CategoryId) -> Result<Vec<Question>> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_question).collect())
    }

    /// Search question text, ignoring case
    pub async fn search_by_text(&self, term: &str) -> Result<Vec<Question>> {
        let search_pattern = format!("%{}%", escape_like(term));

        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id ASC
            "#,
        )
        .bind(search_pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_question).collect())
    }
}

async fn rollback(tx: Transaction<'_, Postgres>, operation: &str) {
    if let Err(err) = tx.rollback().await {
        tracing::warn!(operation, error = %err, "Rollback failed");
    } else {
        tracing::warn!(operation, "Transaction rolled back");
    }
}

/// Escape LIKE wildcards so the term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_question(row: sqlx::postgres::PgRow) -> Question {
    let id: i64 = row.get("id");
    let question: String = row.get("question");
    let answer: String = row.get("answer");
    let category: i64 = row.get("category");
    let difficulty: i32 = row.get("difficulty");

    Question {
        id: QuestionId(id),
        question,
        answer,
        category: CategoryId(category),
        difficulty,
    }
}

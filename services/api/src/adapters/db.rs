//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `QuestionStore` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use trivia_core::domain::{Category, NewQuestion, Question};
use trivia_core::ports::{PortError, PortResult, QuestionStore};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `QuestionStore` port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct CategoryRecord {
    id: i32,
    #[sqlx(rename = "type")]
    kind: String,
}
impl CategoryRecord {
    fn to_domain(self) -> Category {
        Category {
            id: self.id,
            kind: self.kind,
        }
    }
}

#[derive(FromRow)]
struct QuestionRecord {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}
impl QuestionRecord {
    fn to_domain(self) -> Question {
        Question {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

fn unexpected(e: sqlx::Error) -> PortError {
    PortError::Unexpected(e.to_string())
}

//=========================================================================================
// `QuestionStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl QuestionStore for DbAdapter {
    async fn list_categories(&self) -> PortResult<Vec<Category>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            r#"SELECT id, "type" FROM categories ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn get_category(&self, category_id: i32) -> PortResult<Category> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"SELECT id, "type" FROM categories WHERE id = $1"#,
        )
        .bind(category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                PortError::NotFound(format!("Category {} not found", category_id))
            }
            _ => unexpected(e),
        })?;
        Ok(record.to_domain())
    }

    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn list_questions_by_category(&self, category_id: i32) -> PortResult<Vec<Question>> {
        let records = sqlx::query_as::<_, QuestionRecord>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(records.into_iter().map(|r| r.to_domain()).collect())
    }

    async fn get_question(&self, question_id: i32) -> PortResult<Question> {
        let record = sqlx::query_as::<_, QuestionRecord>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(question_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                PortError::NotFound(format!("Question {} not found", question_id))
            }
            _ => unexpected(e),
        })?;
        Ok(record.to_domain())
    }

    async fn create_question(&self, question: NewQuestion) -> PortResult<Question> {
        let record = sqlx::query_as::<_, QuestionRecord>(&format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {QUESTION_COLUMNS}"
        ))
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .fetch_one(&self.pool)
        .await
        .map_err(unexpected)?;
        Ok(record.to_domain())
    }

    async fn delete_question(&self, question_id: i32) -> PortResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question_id)
            .execute(&self.pool)
            .await
            .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(PortError::NotFound(format!("Question {} not found", question_id)));
        }
        Ok(())
    }
}

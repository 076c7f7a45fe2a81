//! crates/trivia_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The store trait is the boundary between the core and whatever persistence
//! engine the service is wired to.

use crate::domain::{Category, NewQuestion, Question};
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait QuestionStore: Send + Sync {
    // --- Categories ---
    async fn list_categories(&self) -> PortResult<Vec<Category>>;

    /// Fails with `PortError::NotFound` when no category has this id.
    async fn get_category(&self, category_id: i32) -> PortResult<Category>;

    // --- Questions ---
    /// All questions, ordered by id.
    async fn list_questions(&self) -> PortResult<Vec<Question>>;

    /// Questions of one category, ordered by id.
    async fn list_questions_by_category(&self, category_id: i32) -> PortResult<Vec<Question>>;

    async fn get_question(&self, question_id: i32) -> PortResult<Question>;

    async fn create_question(&self, question: NewQuestion) -> PortResult<Question>;

    /// Fails with `PortError::NotFound` when nothing was deleted.
    async fn delete_question(&self, question_id: i32) -> PortResult<()>;
}

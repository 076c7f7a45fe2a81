//! crates/trivia_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or serialization format.

/// A single trivia question. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Id of the owning `Category`.
    pub category: i32,
    pub difficulty: i32,
}

/// A question category, seeded out of band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// The human readable label ("Science", "Art", ...).
    pub kind: String,
}

/// A question that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{0}' must not be empty")]
    Empty(&'static str),
    #[error("category must be a positive id, got {0}")]
    InvalidCategory(i32),
    #[error("difficulty must be at least 1, got {0}")]
    InvalidDifficulty(i32),
}

impl NewQuestion {
    /// Validates the raw fields. Text fields are trimmed.
    pub fn new(
        question: &str,
        answer: &str,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(ValidationError::Empty("question"));
        }
        if answer.is_empty() {
            return Err(ValidationError::Empty("answer"));
        }
        if category < 1 {
            return Err(ValidationError::InvalidCategory(category));
        }
        if difficulty < 1 {
            return Err(ValidationError::InvalidDifficulty(difficulty));
        }
        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attaches the id assigned by the store.
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was served.
    pub number: usize,
    /// Size of the whole collection, not of `items`.
    pub total: usize,
}

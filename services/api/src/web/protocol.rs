//! services/api/src/web/protocol.rs
//!
//! Defines the JSON payloads exchanged between the quiz frontend and the API server.

use serde::{Deserialize, Serialize};
use trivia_core::domain::{Category, Question};
use utoipa::{IntoParams, ToSchema};

//=========================================================================================
// Shared Views
//=========================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct QuestionView {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionView {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CategoryView {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryView {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

//=========================================================================================
// Requests
//=========================================================================================

/// Query string of `GET /questions`.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<usize>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SearchRequest {
    /// Older clients send the term as `query`.
    #[serde(rename = "searchTerm", alias = "query")]
    pub search_term: String,
}

/// The quiz category as sent by clients: a bare id, or a category object.
/// Ids are JSON integers; `"3"` is rejected.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(
    untagged,
    expecting = "quiz_category must be an integer id or an object with an integer `id`"
)]
pub enum QuizCategory {
    Id(i32),
    Object { id: i32 },
}

impl QuizCategory {
    pub fn id(&self) -> i32 {
        match self {
            QuizCategory::Id(id) => *id,
            QuizCategory::Object { id } => *id,
        }
    }
}

/// A previously asked question: a bare id, or the question object itself.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(
    untagged,
    expecting = "previous question must be an integer id or an object with an integer `id`"
)]
pub enum PreviousQuestion {
    Id(i32),
    Object { id: i32 },
}

impl PreviousQuestion {
    pub fn id(&self) -> i32 {
        match self {
            PreviousQuestion::Id(id) => *id,
            PreviousQuestion::Object { id } => *id,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct QuizRequest {
    /// Absent, null, or id 0 means every category. String ids such as
    /// `{"id": "0"}` are answered with 400.
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<PreviousQuestion>,
}

//=========================================================================================
// Responses
//=========================================================================================

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryView>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    /// Size of the whole listing, not of this page.
    pub total_questions: usize,
    pub page: usize,
    pub categories: Vec<CategoryView>,
    pub current_category: Option<String>,
}

/// Returned by search and by category listing.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: QuestionView,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub id: i32,
    pub question: QuestionView,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub id: i32,
}

//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::{
    error::{AppJson, AppPath, AppQuery, ErrorBody, HttpError},
    protocol::{
        CategoriesResponse, CategoryView, CreateQuestionRequest, CreateQuestionResponse,
        DeleteQuestionResponse, PageParams, PreviousQuestion, QuestionListResponse,
        QuestionPageResponse, QuestionResponse, QuestionView, QuizCategory, QuizRequest,
        SearchRequest,
    },
    state::AppState,
};
use axum::{extract::State, response::Json};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;
use trivia_core::{
    listing::{paginate, search},
    ports::PortError,
    quiz::{select_question, QuizOutcome, QuizTarget},
    NewQuestion,
};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories_handler,
        category_questions_handler,
        list_questions_handler,
        create_question_handler,
        get_question_handler,
        delete_question_handler,
        search_questions_handler,
        quiz_handler,
    ),
    components(
        schemas(
            CategoryView, QuestionView, CategoriesResponse, QuestionPageResponse,
            QuestionListResponse, QuestionResponse, CreateQuestionRequest,
            CreateQuestionResponse, DeleteQuestionResponse, SearchRequest,
            QuizRequest, QuizCategory, PreviousQuestion, ErrorBody
        )
    ),
    tags(
        (name = "Trivia API", description = "API endpoints for the trivia quiz application.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Categories
//=========================================================================================

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_categories_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, HttpError> {
    let categories = app_state.store.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(CategoryView::from).collect(),
    }))
}

/// List the questions of one category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(("id" = i32, Path, description = "The category id.")),
    responses(
        (status = 200, description = "Questions of the category", body = QuestionListResponse),
        (status = 404, description = "No such category", body = ErrorBody)
    )
)]
pub async fn category_questions_handler(
    State(app_state): State<Arc<AppState>>,
    AppPath(category_id): AppPath<i32>,
) -> Result<Json<QuestionListResponse>, HttpError> {
    let category = app_state.store.get_category(category_id).await?;
    let questions = app_state
        .store
        .list_questions_by_category(category.id)
        .await?;

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions: questions.into_iter().map(QuestionView::from).collect(),
        current_category: Some(category.kind),
    }))
}

//=========================================================================================
// Questions
//=========================================================================================

/// List one page of questions, with the categories for the sidebar.
#[utoipa::path(
    get,
    path = "/questions",
    params(PageParams),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponse),
        (status = 400, description = "Invalid page number", body = ErrorBody)
    )
)]
pub async fn list_questions_handler(
    State(app_state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<QuestionPageResponse>, HttpError> {
    let questions = app_state.store.list_questions().await?;
    let categories = app_state.store.list_categories().await?;
    let page = paginate(
        questions,
        params.page.unwrap_or(1),
        app_state.config.questions_per_page,
    );

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: page.items.into_iter().map(QuestionView::from).collect(),
        total_questions: page.total,
        page: page.number,
        categories: categories.into_iter().map(CategoryView::from).collect(),
        current_category: None,
    }))
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 422, description = "Invalid field or unknown category", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn create_question_handler(
    State(app_state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, HttpError> {
    let new_question = NewQuestion::new(&req.question, &req.answer, req.category, req.difficulty)?;

    match app_state.store.get_category(new_question.category()).await {
        Ok(_) => {}
        Err(PortError::NotFound(_)) => {
            return Err(HttpError::Unprocessable(format!(
                "category {} does not exist",
                new_question.category()
            )))
        }
        Err(e) => return Err(e.into()),
    }

    let question = app_state.store.create_question(new_question).await?;
    info!("Created question {} in category {}", question.id, question.category);

    Ok(Json(CreateQuestionResponse {
        success: true,
        id: question.id,
        question: question.into(),
    }))
}

/// Fetch a single question.
#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "The question id.")),
    responses(
        (status = 200, description = "The question", body = QuestionResponse),
        (status = 404, description = "No such question", body = ErrorBody)
    )
)]
pub async fn get_question_handler(
    State(app_state): State<Arc<AppState>>,
    AppPath(question_id): AppPath<i32>,
) -> Result<Json<QuestionResponse>, HttpError> {
    let question = app_state.store.get_question(question_id).await?;
    Ok(Json(QuestionResponse {
        success: true,
        question: question.into(),
    }))
}

/// Delete a question.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i32, Path, description = "The question id.")),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn delete_question_handler(
    State(app_state): State<Arc<AppState>>,
    AppPath(question_id): AppPath<i32>,
) -> Result<Json<DeleteQuestionResponse>, HttpError> {
    app_state.store.delete_question(question_id).await?;
    info!("Deleted question {}", question_id);

    Ok(Json(DeleteQuestionResponse {
        success: true,
        id: question_id,
    }))
}

/// Find the questions whose text contains a term, ignoring case.
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = QuestionListResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "Nothing matched", body = ErrorBody)
    )
)]
pub async fn search_questions_handler(
    State(app_state): State<Arc<AppState>>,
    AppJson(req): AppJson<SearchRequest>,
) -> Result<Json<QuestionListResponse>, HttpError> {
    let questions = app_state.store.list_questions().await?;
    let matches = search(questions, &req.search_term);
    if matches.is_empty() {
        return Err(HttpError::NotFound(format!(
            "No question contains '{}'",
            req.search_term
        )));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: matches.len(),
        questions: matches.into_iter().map(QuestionView::from).collect(),
        current_category: None,
    }))
}

//=========================================================================================
// Quiz
//=========================================================================================

/// Draw a random question the player has not seen yet.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "The next question", body = QuestionResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "Unknown category, or no question left", body = ErrorBody)
    )
)]
pub async fn quiz_handler(
    State(app_state): State<Arc<AppState>>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<Json<QuestionResponse>, HttpError> {
    let target = QuizTarget::from_category_id(req.quiz_category.as_ref().map(QuizCategory::id));
    let candidates = match target {
        QuizTarget::All => app_state.store.list_questions().await?,
        QuizTarget::Category(id) => {
            let category = app_state.store.get_category(id).await?;
            app_state.store.list_questions_by_category(category.id).await?
        }
    };
    let seen: HashSet<i32> = req
        .previous_questions
        .iter()
        .map(PreviousQuestion::id)
        .collect();

    let outcome = select_question(candidates, target, &seen, &mut rand::thread_rng());
    match outcome {
        QuizOutcome::Next(question) => Ok(Json(QuestionResponse {
            success: true,
            question: question.into(),
        })),
        QuizOutcome::Exhausted => {
            info!("Quiz exhausted for {:?} after {} questions", target, seen.len());
            Err(HttpError::NotFound("No more questions".to_string()))
        }
    }
}

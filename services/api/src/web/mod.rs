pub mod error;
pub mod protocol;
pub mod rest;
pub mod state;

use crate::config::CorsOrigin;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use rest::{
    category_questions_handler, create_question_handler, delete_question_handler,
    get_question_handler, list_categories_handler, list_questions_handler, quiz_handler,
    search_questions_handler, ApiDoc,
};
pub use state::AppState;

/// Builds the API router with CORS and request tracing applied.
pub fn router(app_state: Arc<AppState>) -> Router {
    let allow_origin = match &app_state.config.cors_origin {
        CorsOrigin::Any => AllowOrigin::any(),
        CorsOrigin::Exact(origin) => AllowOrigin::exact(origin.clone()),
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories/{id}/questions", get(category_questions_handler))
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route(
            "/questions/{id}",
            get(get_question_handler).delete(delete_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions_search", post(search_questions_handler))
        .route("/quizzes", post(quiz_handler))
        .fallback(error::not_found_fallback)
        .method_not_allowed_fallback(error::method_not_allowed_fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

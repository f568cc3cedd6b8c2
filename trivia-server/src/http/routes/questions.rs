//! Question endpoints - listing, create, delete, search

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{json_body, Page, PathId};
use crate::models::{category, CreateQuestionRequest, NewQuestion, Question};
use crate::state::AppState;

/// Paged question listing response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_question: usize,
    pub categories: BTreeMap<i32, String>,
    /// Category of the last question on this page
    pub current_category: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub question_id: i32,
}

/// Search request body
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Search response.
///
/// `total_questions` deliberately counts every match across all pages
/// rather than the length of the returned page.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Number of matches across all pages
    pub total_questions: usize,
    pub current_category: Option<&'static str>,
}

/// GET /questions - one page of all questions plus the category map
async fn list_questions(
    State(state): State<AppState>,
    Page(pagination): Page,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let store = state.store();
    let questions = store.list_all().await?;
    let page = pagination.slice(&questions);

    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category::by_id(store.list_categories().await?);
    let current_category = page.last().and_then(|q| category::name_for(q.category));

    Ok(Json(QuestionsResponse {
        success: true,
        questions: page.to_vec(),
        total_question: questions.len(),
        categories,
        current_category,
    }))
}

/// POST /questions - validate and store a new question
async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let req = json_body(payload, ApiError::BadRequest)?;
    let question = NewQuestion::try_from(req)?;

    let created = state.store().insert(question).await?;
    tracing::info!(id = created.id, category = created.category, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
    }))
}

/// DELETE /questions/{question_id}
async fn delete_question(
    State(state): State<AppState>,
    PathId(question_id): PathId,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.store().delete_by_id(question_id).await?;
    tracing::info!(question_id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        question_id,
    }))
}

/// POST /questions/search - case-insensitive substring match, paged
async fn search_questions(
    State(state): State<AppState>,
    Page(pagination): Page,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let req = json_body(payload, ApiError::Unprocessable)?;

    let matches = state
        .store()
        .find_by_substring(&req.search_term)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::debug!(term = %req.search_term, matches = matches.len(), "search");

    let page = pagination.slice(&matches);

    Ok(Json(SearchResponse {
        success: true,
        questions: page.to_vec(),
        total_questions: matches.len(),
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}

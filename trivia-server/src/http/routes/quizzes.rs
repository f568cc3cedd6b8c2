//! Quiz endpoint - draw the next unseen question
//!
//! The server keeps no quiz state; clients send back every id they have
//! already been shown.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::json_body;
use crate::models::{LenientInt, Question, ValidationError};
use crate::state::AppState;

/// Category id meaning "every category"
pub const ALL_CATEGORIES: i32 = 0;

/// Quiz request body
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: QuizCategory,
}

/// `{id, type}` as sent by the front-end; only `id` matters here.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: LenientInt,
}

impl QuizRequest {
    /// Category to draw from, `None` for all categories.
    pub fn category_filter(&self) -> Result<Option<i32>, ValidationError> {
        let id = self.quiz_category.id.resolve("quiz_category.id")?;
        Ok((id != ALL_CATEGORIES).then_some(id))
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// Uniform choice over the eligible set.
pub fn pick_question<'a, R>(eligible: &'a [Question], rng: &mut R) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    eligible.choose(rng)
}

/// POST /quizzes - random question not in `previous_questions`
async fn next_question(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let req = json_body(payload, ApiError::Unprocessable)?;
    let category = req.category_filter().map_err(ApiError::unprocessable)?;
    let previous = req.previous_questions.unwrap_or_default();

    let eligible = state
        .store()
        .find_excluding(&previous, category)
        .await
        .map_err(ApiError::unprocessable)?;

    let question = pick_question(&eligible, &mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| ApiError::unprocessable("no eligible questions remain"))?;

    tracing::debug!(
        id = question.id,
        ?category,
        seen = previous.len(),
        eligible = eligible.len(),
        "quiz question drawn"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}

//! Category endpoints

use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{Page, PathId};
use crate::models::{category, Question};
use crate::state::AppState;

/// Category listing response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Questions-in-category response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: &'static str,
}

/// GET /categories - id -> name for every category
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category::by_id(state.store().list_categories().await?);

    if categories.is_empty() {
        tracing::debug!("no categories in store");
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{category_id}/questions - one page of a category
async fn questions_in_category(
    State(state): State<AppState>,
    PathId(category_id): PathId,
    Page(pagination): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Some(current_category) = category::name_for(category_id) else {
        tracing::debug!(category_id, "unknown category");
        return Err(ApiError::NotFound);
    };

    let questions = state.store().find_by_category(category_id).await?;
    let page = pagination.slice(&questions);

    if page.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.to_vec(),
        total_questions: questions.len(),
        current_category,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(questions_in_category))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::db::MemoryQuestionStore;
    use crate::http::testing::{app, numbered_store, send};

    #[tokio::test]
    async fn lists_all_six_categories() {
        let (status, body) = send(app(numbered_store(0)), "GET", "/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "categories": {
                    "1": "Science",
                    "2": "Art",
                    "3": "Geography",
                    "4": "History",
                    "5": "Entertainment",
                    "6": "Sports"
                }
            })
        );
    }

    #[tokio::test]
    async fn empty_catalog_is_404() {
        let store = MemoryQuestionStore::with_categories(Vec::new());
        let (status, body) = send(app(store), "GET", "/categories", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn questions_for_category() {
        // 15 questions, categories cycle 1..=6 -> category 3 has ids 3, 9, 15
        let (status, body) = send(
            app(numbered_store(15)),
            "GET",
            "/categories/3/questions",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["currentCategory"], "Geography");
        assert_eq!(body["totalQuestions"], 3);
        let ids: Vec<i64> = body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 9, 15]);
    }

    #[tokio::test]
    async fn total_is_true_count_across_pages() {
        // 30 questions -> 5 per category, all on page 1
        let (_, body) = send(app(numbered_store(30)), "GET", "/categories/1/questions", None).await;
        assert_eq!(body["totalQuestions"], 5);
        assert_eq!(body["questions"].as_array().unwrap().len(), 5);

        // 72 questions -> 12 in category 6, page 2 holds the last 2
        let (status, body) = send(
            app(numbered_store(72)),
            "GET",
            "/categories/6/questions?page=2",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalQuestions"], 12);
        assert_eq!(body["questions"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_category_is_404() {
        let (status, body) = send(
            app(numbered_store(15)),
            "GET",
            "/categories/500/questions",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "resource not found");
    }

    #[tokio::test]
    async fn non_numeric_category_is_404() {
        let (status, _) = send(app(numbered_store(3)), "GET", "/categories/abc/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn repeated_page_param_falls_back_to_first_page() {
        let (status, body) = send(
            app(numbered_store(72)),
            "GET",
            "/categories/6/questions?page=2&page=1",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["questions"][0]["id"], 6);
    }

    #[tokio::test]
    async fn known_category_without_questions_is_404() {
        let (status, _) = send(app(numbered_store(2)), "GET", "/categories/5/questions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

//! trivia-server: HTTP API for trivia questions
//!
//! Serves categories, paginated question listings, search, question
//! create/delete and random quiz draws over a Postgres or in-memory store.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{MemoryQuestionStore, PgQuestionStore, QuestionStore, StoreError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;

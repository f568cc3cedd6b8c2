//! Database layer - question store implementations
//!
//! - `QuestionStore` is the seam handlers depend on
//! - Postgres via a sqlx pool, mutations in explicit transactions
//! - In-memory store with the same contract for tests and local runs

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryQuestionStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgQuestionStore;
pub use store::{QuestionStore, StoreError};

//! Domain models with validation at construction
//!
//! Request input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod pagination;
pub mod question;
pub mod validation;

pub use category::Category;
pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::{CreateQuestionRequest, NewQuestion, Question};
pub use validation::{LenientInt, ValidationError};

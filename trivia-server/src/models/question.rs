//! Question records and validated input for creating them

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{LenientInt, ValidationError};

/// Lowest accepted difficulty rating
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty rating
pub const MAX_DIFFICULTY: i32 = 5;

/// Stored question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Wire shape of `POST /questions`. Every field is optional here so that
/// absence is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LenientInt>,
    pub category: Option<LenientInt>,
}

/// A question that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CreateQuestionRequest")]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl NewQuestion {
    /// Validate and build a new question.
    ///
    /// # Rules
    /// - `question` and `answer` must not be blank
    /// - `difficulty` within `MIN_DIFFICULTY..=MAX_DIFFICULTY`
    /// - `category` must be positive (existence is not checked)
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(ValidationError::Empty { field: "question" });
        }
        if answer.trim().is_empty() {
            return Err(ValidationError::Empty { field: "answer" });
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY,
                max: MAX_DIFFICULTY,
            });
        }
        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                min: 1,
                max: i32::MAX,
            });
        }

        Ok(Self {
            question,
            answer,
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

    /// Attach a store-assigned id.
    pub fn with_id(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let question = req.question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = req.answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let difficulty = req
            .difficulty
            .ok_or(ValidationError::Missing { field: "difficulty" })?
            .resolve("difficulty")?;
        let category = req
            .category
            .ok_or(ValidationError::Missing { field: "category" })?
            .resolve("category")?;

        Self::new(question, answer, category, difficulty)
    }
}

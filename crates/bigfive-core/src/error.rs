//! Error types for the Big Five questionnaire service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("question loading error: {0}")]
    QuestionLoad(String),

    #[error("model loading error: {0}")]
    ModelLoad(String),

    #[error("prediction model is not loaded")]
    ModelUnavailable,

    #[error("prediction error: {0}")]
    Prediction(String),

    #[error("answer missing for question {question_id}")]
    MissingAnswer { question_id: String },

    #[error("invalid response {value} for question {question_id}: expected 1-5")]
    InvalidResponse { question_id: String, value: i64 },

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

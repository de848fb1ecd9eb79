use crate::models::ParseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid mood: {0}")]
    InvalidMood(String),

    #[error("invalid screen: {0}")]
    InvalidScreen(String),

    #[error("invalid goal: {0}")]
    InvalidGoal(String),

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidMood(_) | AppError::InvalidScreen(_) | AppError::InvalidGoal(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Mood(key) => AppError::InvalidMood(key),
            ParseError::Screen(key) => AppError::InvalidScreen(key),
            ParseError::Goal(key) => AppError::InvalidGoal(key),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, "rejected request");

        let body = json!({
            "error": {
                "message": self.to_string(),
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

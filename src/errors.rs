use crate::models::{HabitKind, LogValue};
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HabitError {
    #[error("habit name must not be blank")]
    EmptyName,

    #[error("{value} cannot be logged on a {kind} habit")]
    TypeMismatch { kind: HabitKind, value: LogValue },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        let status = match err {
            HabitError::TypeMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_maps_to_unprocessable() {
        let err: AppError = HabitError::TypeMismatch {
            kind: HabitKind::Tick,
            value: LogValue::Value(3.0),
        }
        .into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "value 3 cannot be logged on a tick habit");
    }

    #[test]
    fn input_errors_map_to_bad_request() {
        let err: AppError = HabitError::InvalidDate("03/10/2024".into()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        let err: AppError = HabitError::EmptyName.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}

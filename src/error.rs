//! Request-level errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::database::activity_directory::DirectoryError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `email` query parameter absent.
    #[error("email is required")]
    MissingEmail,

    #[error("invalid email address: {input:?}")]
    InvalidEmail { input: String },

    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

impl ApiError {
    /// - Missing/invalid input: 422, rejected before any lookup
    /// - Unknown activity: 404
    /// - Duplicate or full: 400
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingEmail | Self::InvalidEmail { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ActivityNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::ActivityFull => StatusCode::BAD_REQUEST,
        }
    }

    fn detail(&self) -> Value {
        match self {
            Self::MissingEmail => json!([{
                "type": "missing",
                "loc": ["query", "email"],
                "msg": "Field required",
                "input": Value::Null,
            }]),
            Self::InvalidEmail { input } => json!([{
                "type": "value_error",
                "loc": ["query", "email"],
                "msg": "value is not a valid email address",
                "input": input,
            }]),
            other => Value::String(other.to_string()),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => Self::ActivityNotFound,
            DirectoryError::AlreadySignedUp { .. } => Self::AlreadySignedUp,
            DirectoryError::Full { .. } => Self::ActivityFull,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::MissingEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InvalidEmail {
                input: "x".into()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::ActivityNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::AlreadySignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::ActivityFull.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn business_errors_carry_plain_detail() {
        assert_eq!(ApiError::ActivityNotFound.detail(), json!("Activity not found"));
        assert_eq!(
            ApiError::AlreadySignedUp.detail(),
            json!("Student already signed up for this activity")
        );
        assert_eq!(ApiError::ActivityFull.detail(), json!("Activity is full"));
    }

    #[test]
    fn validation_errors_point_at_the_email_param() {
        let detail = ApiError::InvalidEmail {
            input: "not-an-email".into(),
        }
        .detail();
        assert_eq!(detail[0]["loc"], json!(["query", "email"]));
        assert_eq!(detail[0]["input"], json!("not-an-email"));
    }

    #[test]
    fn directory_errors_map_to_api_errors() {
        assert_eq!(
            ApiError::from(DirectoryError::NotFound("Nope".into())),
            ApiError::ActivityNotFound
        );
        assert_eq!(
            ApiError::from(DirectoryError::Full {
                activity: "Chess Club".into(),
                max_participants: 12,
            }),
            ApiError::ActivityFull
        );
    }
}

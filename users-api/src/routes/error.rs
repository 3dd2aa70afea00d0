use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{AvatarError, UserError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<AvatarError> for ApiError {
    fn from(err: AvatarError) -> Self {
        match err {
            AvatarError::UserNotFound | AvatarError::ProfileNotFound => {
                Self::not_found(err.to_string())
            }
            AvatarError::NoStoredAvatar
            | AvatarError::Storage(_)
            | AvatarError::Repository(_) => Self::bad_request(err.to_string()),
            AvatarError::Upstream(ref message) => {
                tracing::error!("Avatar upstream request failed: {}", message);
                Self::internal("An error occurred while fetching the avatar")
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => Self::not_found(err.to_string()),
            UserError::Invalid(_) | UserError::BadRequest(_) => Self::bad_request(err.to_string()),
            UserError::Upstream(ref message) => {
                tracing::error!("Profile upstream request failed: {}", message);
                Self::internal("An error occurred while fetching user data")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_errors_map_to_statuses() {
        let cases = [
            (AvatarError::UserNotFound, StatusCode::NOT_FOUND),
            (AvatarError::ProfileNotFound, StatusCode::NOT_FOUND),
            (AvatarError::NoStoredAvatar, StatusCode::BAD_REQUEST),
            (AvatarError::storage("disk full"), StatusCode::BAD_REQUEST),
            (
                AvatarError::Repository("constraint".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (AvatarError::upstream("timeout"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status, expected);
        }
    }

    #[test]
    fn upstream_details_are_not_leaked() {
        let api_error = ApiError::from(UserError::Upstream("10.0.0.3 refused".to_string()));

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api_error.message.contains("10.0.0.3"));
    }

    #[test]
    fn storage_message_is_kept() {
        let api_error = ApiError::from(AvatarError::storage("permission denied"));

        assert!(api_error.message.contains("permission denied"));
    }
}

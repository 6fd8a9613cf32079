use axum::{Json, http::StatusCode, response::IntoResponse};

use super::protocol::{
    ERR_CODE_ALREADY_EXISTS, ERR_CODE_INVALID_REQUEST, ERR_CODE_NOT_FOUND, ErrorResponse,
};
use crate::storage::StoreError;

/// Error returned by the quote handlers.
///
/// Carries the HTTP status together with the `code`/`message` pair rendered
/// into the JSON body. Every error is logged when it is turned into a response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ERR_CODE_INVALID_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ERR_CODE_INVALID_REQUEST,
            message,
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &str {
        self.code
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidData => Self::unprocessable("Author and quote are required"),
            StoreError::AlreadyExists => Self::new(
                StatusCode::CONFLICT,
                ERR_CODE_ALREADY_EXISTS,
                "Quote already exists",
            ),
            StoreError::NotFound => {
                Self::new(StatusCode::NOT_FOUND, ERR_CODE_NOT_FOUND, "Quote not found")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(
            status = self.status.as_u16(),
            code = self.code,
            "{}",
            self.message
        );

        let body = ErrorResponse {
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

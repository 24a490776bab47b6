use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// Every failure the API can emit. A single translation table maps each kind
/// to the HTTP status and JSON body the existing clients key on: 403/500 for
/// the two authentication outcomes, 411 for validation and store failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    NotLoggedIn,
    AuthFailure,
    InvalidInputs,
    PostFailed,
    BlogNotFound,
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotLoggedIn => StatusCode::FORBIDDEN,
            AppError::AuthFailure | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // 411 is the inherited wire code for both bad input and failed
            // store operations
            AppError::InvalidInputs | AppError::PostFailed | AppError::BlogNotFound => {
                StatusCode::LENGTH_REQUIRED
            }
        }
    }

    // clients read either `msg` or `message` depending on the endpoint;
    // both spellings are part of the wire contract
    fn body(&self) -> Value {
        match self {
            AppError::NotLoggedIn => json!({ "message": "You are not logged in" }),
            AppError::AuthFailure => {
                json!({ "message": "Internal server error during authentication" })
            }
            AppError::InvalidInputs => json!({ "msg": "Invalid inputs" }),
            AppError::PostFailed => json!({ "message": "Error while posting the blog" }),
            AppError::BlogNotFound => json!({ "msg": "Blog is not found" }),
            AppError::Internal(message) => json!({ "error": message }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Store errors that no handler intercepts surface as an opaque 500.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

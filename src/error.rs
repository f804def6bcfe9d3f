use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] foodgram_shared::Error),

    #[error("authentication credentials were not provided or are invalid")]
    Unauthorized,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Domain(err) => match err {
                foodgram_shared::Error::Validate(_) => StatusCode::UNPROCESSABLE_ENTITY,
                foodgram_shared::Error::User(_) => StatusCode::BAD_REQUEST,
                foodgram_shared::Error::NotFound(_) => StatusCode::NOT_FOUND,
                foodgram_shared::Error::Integrity(_) | foodgram_shared::Error::Unknown(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bramon::ApiError;

pub enum WebError {
    Upstream(ApiError),
    Render(askama::Error),
}

impl From<ApiError> for WebError {
    fn from(e: ApiError) -> Self {
        WebError::Upstream(e)
    }
}

impl From<askama::Error> for WebError {
    fn from(e: askama::Error) -> Self {
        WebError::Render(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Upstream(e) => {
                log::warn!("BRAMON API request failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorResponse::with_message(
                        "upstream_unavailable",
                        &e.to_string(),
                    )),
                )
                    .into_response()
            }
            WebError::Render(e) => {
                log::error!("Template rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("render_failed")),
                )
                    .into_response()
            }
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: None,
        }
    }

    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}

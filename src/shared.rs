use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::activity::repository::ActivityRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub activity_repository: Arc<dyn ActivityRepository + Send + Sync>,
}

impl AppState {
    pub fn new(activity_repository: Arc<dyn ActivityRepository + Send + Sync>) -> Self {
        Self {
            activity_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::AlreadyRegistered(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "detail": detail
        }));

        (status, body).into_response()
    }
}

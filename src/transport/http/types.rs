use crate::app::ClientService;
use crate::storage::ClientRepository;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<ClientService>,
}

impl AppState {
    pub fn new(client_service: ClientService) -> Self {
        Self {
            client_service: Arc::new(client_service),
        }
    }

    pub fn with_repository(repository: Arc<dyn ClientRepository>) -> Self {
        Self::new(ClientService::new(repository))
    }
}

/// Body for failures that are not field violations.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn error_body(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Unreadable request bodies are client errors; a missing JSON content type stays 415.
pub fn json_400(err: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    error_body(status, format!("Invalid JSON body: {}", err.body_text()))
}

use crate::app::AddClientError;
use crate::domain::ClientRecord;
use crate::transport::http::types::{error_body, json_400, AppState, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::HashMap;

#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All stored clients", body = Vec<ClientRecord>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_clients_handler(State(state): State<AppState>) -> Response {
    match state.client_service.list_clients().await {
        Ok(clients) => (StatusCode::OK, Json(clients)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to list clients");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list clients: {}", e),
            )
            .into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/add",
    request_body = ClientRecord,
    responses(
        (status = 200, description = "Client stored", body = ClientRecord),
        (status = 400, description = "Field violations (field name -> message) or unreadable body",
            body = HashMap<String, String>,
            example = json!({"postalCode": "postal code must match format XX-XXX"})),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn add_client_handler(
    State(state): State<AppState>,
    request: Result<Json<ClientRecord>, JsonRejection>,
) -> Response {
    let Json(record) = match request {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting unreadable client body");
            return json_400(e).into_response();
        }
    };

    match state.client_service.add_client(record).await {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(AddClientError::Invalid(failure)) => {
            (StatusCode::BAD_REQUEST, Json(failure.into_violations())).into_response()
        }
        Err(e @ AddClientError::Storage(_)) => {
            tracing::error!(error = %e, "failed to save client");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

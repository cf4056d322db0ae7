use crate::domain::ClientRecord;
use crate::transport::http::handlers::{clients, greeting, health};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        greeting::greeting_handler,
        clients::list_clients_handler,
        clients::add_client_handler,
        health::healthcheck_handler
    ),
    components(schemas(ClientRecord, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::greeting_handler))
        .route("/clients", get(clients::list_clients_handler))
        .route("/add", post(clients::add_client_handler))
        .route("/health", get(health::healthcheck_handler))
        .with_state(app_state)
}

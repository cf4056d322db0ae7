#![allow(dead_code)]

use client_validation_service::transport;
use client_validation_service::{ClientRepository, InMemoryClientRepository};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub repository: Arc<InMemoryClientRepository>,
}

/// Starts the router on an ephemeral port backed by fresh in-memory storage.
pub async fn spawn_app() -> Result<TestApp, Box<dyn std::error::Error>> {
    let repository = Arc::new(InMemoryClientRepository::new());
    let base_url = spawn_with(repository.clone()).await?;
    Ok(TestApp {
        base_url,
        client: reqwest::Client::new(),
        repository,
    })
}

pub async fn spawn_with(
    repository: Arc<dyn ClientRepository>,
) -> Result<String, Box<dyn std::error::Error>> {
    let state = transport::http::AppState::with_repository(repository);
    let router = transport::http::create_router(state);

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

/// The reference client that passes every rule.
pub fn adam() -> Value {
    json!({
        "id": 1,
        "name": "Adam",
        "city": "Andrychow",
        "postalCode": "16-300",
        "email": "adam@andrychow.pl",
        "birthDate": "2000-11-20",
        "positiveNumber": 1
    })
}

pub fn adam_with(field: &str, value: Value) -> Value {
    let mut client = adam();
    client[field] = value;
    client
}

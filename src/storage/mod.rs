//! Storage collaborator for client records.

use crate::domain::ClientRecord;
use crate::infra::config::Config;
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryClientRepository;
pub use postgres::PostgresClientRepository;

/// Persistence operations the request handler relies on.
///
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Persists `record`, assigning an id when it has none, and returns the stored form.
    async fn save(&self, record: ClientRecord) -> anyhow::Result<ClientRecord>;

    /// All stored records, ordered by id.
    async fn find_all(&self) -> anyhow::Result<Vec<ClientRecord>>;

    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Picks the backend from configuration: Postgres when `DATABASE_URL` is set,
/// in-memory otherwise.
pub async fn from_config(config: &Config) -> anyhow::Result<Arc<dyn ClientRepository>> {
    match config.database_url.as_deref() {
        Some(url) => {
            let repo =
                PostgresClientRepository::connect(url, config.database_max_connections).await?;
            tracing::info!("using postgres client storage");
            Ok(Arc::new(repo))
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory client storage");
            Ok(Arc::new(InMemoryClientRepository::new()))
        }
    }
}

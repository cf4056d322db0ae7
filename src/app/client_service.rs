//! The client service.
//!
//! Sits between the HTTP layer and storage. A record reaches storage only
//! after every field rule has passed; rejected records are dropped here.

use crate::domain::client::{self, ClientRecord, ValidationFailure};
use crate::storage::ClientRepository;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum AddClientError {
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),

    #[error("failed to save client: {0:#}")]
    Storage(anyhow::Error),
}

#[derive(Clone)]
pub struct ClientService {
    repository: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// Validates `record` as of today and stores it when it passes.
    pub async fn add_client(&self, record: ClientRecord) -> Result<ClientRecord, AddClientError> {
        self.add_client_on(record, client::today()).await
    }

    /// Same as [`ClientService::add_client`] with an explicit "today".
    pub async fn add_client_on(
        &self,
        record: ClientRecord,
        today: NaiveDate,
    ) -> Result<ClientRecord, AddClientError> {
        if let Err(failure) = client::check(&record, today) {
            warn!(
                fields = %failure.violations().fields().join(","),
                "rejecting client record"
            );
            return Err(failure.into());
        }

        let saved = self
            .repository
            .save(record)
            .await
            .map_err(AddClientError::Storage)?;
        info!(id = ?saved.id, "client saved");
        Ok(saved)
    }

    pub async fn list_clients(&self) -> anyhow::Result<Vec<ClientRecord>> {
        let clients = self.repository.find_all().await?;
        debug!("listed {} clients", clients.len());
        Ok(clients)
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.repository.ping().await
    }
}

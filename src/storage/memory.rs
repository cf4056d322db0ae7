use super::ClientRepository;
use crate::domain::ClientRecord;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local storage. Ids start at 1 and are never reused.
pub struct InMemoryClientRepository {
    inner: RwLock<Inner>,
}

struct Inner {
    next_id: i64,
    records: BTreeMap<i64, ClientRecord>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save(&self, mut record: ClientRecord) -> anyhow::Result<ClientRecord> {
        let mut inner = self.inner.write().await;
        let id = match record.id {
            Some(id) => {
                // Keep generated ids clear of caller-supplied ones.
                inner.next_id = inner.next_id.max(id.saturating_add(1));
                id
            }
            None => {
                let id = inner.next_id;
                inner.next_id = id
                    .checked_add(1)
                    .ok_or_else(|| anyhow::anyhow!("client id sequence exhausted"))?;
                id
            }
        };
        record.id = Some(id);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ClientRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().cloned().collect())
    }
}

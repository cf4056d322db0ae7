pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{AddClientError, ClientService};
pub use domain::client::{ValidationFailure, Violations};
pub use domain::ClientRecord;
pub use infra::Config;
pub use storage::{ClientRepository, InMemoryClientRepository, PostgresClientRepository};

pub mod client_service;

pub use client_service::{AddClientError, ClientService};

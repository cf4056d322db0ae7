pub mod config;
pub mod logging;
pub mod shutdown;

pub use config::{Config, ConfigError};

use client_validation_service::infra::{Config, ConfigError};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.database_url, None);
    assert_eq!(config.database_max_connections, 5);
}

#[test]
fn reads_every_variable() {
    let config = Config::from_lookup(lookup(&[
        ("BIND_ADDR", "127.0.0.1:9000"),
        ("DATABASE_URL", "postgres://localhost/clients"),
        ("DATABASE_MAX_CONNECTIONS", "12"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/clients"));
    assert_eq!(config.database_max_connections, 12);
}

#[test]
fn empty_database_url_means_in_memory() {
    let config = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
    assert_eq!(config.database_url, None);
}

#[test]
fn malformed_values_are_errors() {
    assert_eq!(
        Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
        Err(ConfigError::InvalidBindAddr("localhost".to_string()))
    );
    for bad in ["0", "-3", "many"] {
        assert_eq!(
            Config::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", bad)])),
            Err(ConfigError::InvalidMaxConnections(bad.to_string()))
        );
    }
}

//! Error types.
//!
//! Only failures that stop a run before it starts live here. Per-secret
//! failures from the store are reported as outcomes, see
//! [`crate::core::provisioner::Outcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while loading or validating the provisioning parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid JSON in config file: {0}")]
    ParseJson(#[source] serde_json::Error),

    #[error("invalid TOML in config file: {0}")]
    ParseToml(#[source] toml::de::Error),

    #[error("missing required value: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors raised while setting up the secret store client.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

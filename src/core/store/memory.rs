//! In-memory store.
//!
//! Keeps secrets in a map and records every request. Names can be marked
//! as failing to simulate store errors.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::{CreateError, CreateResult, SecretStore};

/// A create request as received by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub name: String,
    pub description: String,
    pub secret_string: String,
}

/// In-memory secret store.
#[derive(Debug, Default)]
pub struct Memory {
    secrets: RefCell<BTreeMap<String, String>>,
    failures: BTreeMap<String, String>,
    requests: RefCell<Vec<Request>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a secret so that creating it again collides.
    pub fn with_existing(self, name: &str, secret_string: &str) -> Self {
        self.secrets
            .borrow_mut()
            .insert(name.to_string(), secret_string.to_string());
        self
    }

    /// Make every create request for `name` fail with `message`.
    pub fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.failures.insert(name.to_string(), message.to_string());
        self
    }

    /// Stored secret string for `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.secrets.borrow().get(name).cloned()
    }

    /// Number of stored secrets.
    pub fn len(&self) -> usize {
        self.secrets.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }
}

impl SecretStore for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn create_secret(&self, name: &str, description: &str, secret_string: &str) -> CreateResult {
        self.requests.borrow_mut().push(Request {
            name: name.to_string(),
            description: description.to_string(),
            secret_string: secret_string.to_string(),
        });

        if let Some(message) = self.failures.get(name) {
            return Err(CreateError::Other(message.clone()));
        }

        let mut secrets = self.secrets.borrow_mut();
        if secrets.contains_key(name) {
            return Err(CreateError::AlreadyExists);
        }
        secrets.insert(name.to_string(), secret_string.to_string());
        Ok(())
    }
}

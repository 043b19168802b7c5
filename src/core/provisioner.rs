//! Secret provisioning.
//!
//! Walks accounts `1..=account_count`, submits one create request per
//! account and classifies each result. Items are independent: a collision
//! or failure is recorded and the next account is attempted. There are no
//! retries and nothing is rolled back.

use tracing::{debug, info, warn};

use crate::core::config::Config;
use crate::core::secret::SecretRecord;
use crate::core::store::{CreateError, SecretStore};

/// Result of provisioning one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Outcome for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemReport {
    pub index: u32,
    pub name: String,
    pub outcome: Outcome,
}

impl ItemReport {
    /// Human-readable line for this item.
    pub fn line(&self) -> String {
        match &self.outcome {
            Outcome::Created => format!("Created secret: {}", self.name),
            Outcome::AlreadyExists => format!("Secret already exists: {}", self.name),
            Outcome::Failed(message) => {
                format!("Error creating secret {}: {}", self.name, message)
            }
        }
    }
}

/// Outcomes of a whole run, in account order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    items: Vec<ItemReport>,
}

impl Report {
    pub fn items(&self) -> &[ItemReport] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created))
    }

    pub fn already_existed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::AlreadyExists))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.outcome)).count()
    }
}

/// Records that a run would create, without contacting any store.
pub fn plan(config: &Config) -> Vec<SecretRecord> {
    (1..=config.account_count)
        .map(|index| SecretRecord::for_account(index, config))
        .collect()
}

/// Drives account secrets into a [`SecretStore`].
pub struct Provisioner<'a> {
    store: &'a dyn SecretStore,
}

impl<'a> Provisioner<'a> {
    pub fn new(store: &'a dyn SecretStore) -> Self {
        Self { store }
    }

    /// Provision every account in `config`.
    ///
    /// `on_item` is called as soon as each request completes, so output can
    /// be streamed while the run is in progress.
    pub fn run(&self, config: &Config, mut on_item: impl FnMut(&ItemReport)) -> Report {
        debug!(
            store = self.store.name(),
            accounts = config.account_count,
            "provisioning secrets"
        );

        let mut report = Report::default();
        for index in 1..=config.account_count {
            let record = SecretRecord::for_account(index, config);
            let item = ItemReport {
                index,
                outcome: self.submit(&record),
                name: record.name,
            };

            on_item(&item);
            report.items.push(item);
        }

        debug!(
            created = report.created(),
            existing = report.already_existed(),
            failed = report.failed(),
            "provisioning finished"
        );

        report
    }

    fn submit(&self, record: &SecretRecord) -> Outcome {
        let payload = match record.secret_string() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(name = %record.name, error = %e, "failed to serialize secret");
                return Outcome::Failed(e.to_string());
            }
        };

        debug!(
            name = %record.name,
            dn = %record.value.distinguished_name,
            "creating secret"
        );

        match self
            .store
            .create_secret(&record.name, &record.description, payload.as_str())
        {
            Ok(()) => {
                info!(name = %record.name, "created secret");
                Outcome::Created
            }
            Err(CreateError::AlreadyExists) => {
                info!(name = %record.name, "secret already exists");
                Outcome::AlreadyExists
            }
            Err(CreateError::Other(message)) => {
                warn!(name = %record.name, error = %message, "failed to create secret");
                Outcome::Failed(message)
            }
        }
    }
}

//! Secret records.
//!
//! Derives the name, description and JSON payload of the secret for one
//! gMSA account from the provisioning parameters.

use serde::Serialize;
use zeroize::Zeroizing;

use crate::core::config::{Config, Password};
use crate::core::constants;

/// Account name for a 1-based index, e.g. `WebApp03`.
///
/// The index is appended to a literal `WebApp0`, so index 10 gives
/// `WebApp010`.
pub fn account_name(index: u32) -> String {
    format!("{}{}", constants::ACCOUNT_PREFIX, index)
}

/// Secrets Manager name for an account.
pub fn secret_name(index: u32) -> String {
    format!("{}/{}", constants::SECRET_BASE_PATH, account_name(index))
}

/// Distinguished name of the account object in the directory.
pub fn distinguished_name(index: u32, netbios_name: &str) -> String {
    format!(
        "CN={},{},OU={netbios},DC={netbios},DC={}",
        account_name(index),
        constants::DN_OU_PATH,
        constants::DN_TOP_LEVEL,
        netbios = netbios_name,
    )
}

/// JSON payload stored as the secret string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretValue {
    pub username: String,
    pub password: Password,
    pub domain_name: String,
    pub distinguished_name: String,
}

/// A secret to create for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    pub index: u32,
    pub name: String,
    pub description: String,
    pub value: SecretValue,
}

impl SecretRecord {
    /// Build the record for the account at `index` (1-based).
    pub fn for_account(index: u32, config: &Config) -> Self {
        Self {
            index,
            name: secret_name(index),
            description: format!("Secret for {}", account_name(index)),
            value: SecretValue {
                username: config.username.clone(),
                password: config.password.clone(),
                domain_name: config.directory_name.clone(),
                distinguished_name: distinguished_name(index, &config.netbios_name),
            },
        }
    }

    /// Serialized payload sent to the store. Holds the plaintext password,
    /// so it is wiped when dropped.
    pub fn secret_string(&self) -> serde_json::Result<Zeroizing<String>> {
        serde_json::to_string(&self.value).map(Zeroizing::new)
    }
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

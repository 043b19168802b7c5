//! Provisioning parameters.
//!
//! Values come from a data file (`data.json` by default, TOML when the path
//! ends in `.toml`) and are overridden field by field by command-line flags
//! or environment variables. The merged result is validated once and then
//! handed to the provisioner as an immutable [`Config`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroize;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Directory service password.
///
/// Never printed by `Debug` or `Display`. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Plaintext value. Only the secret payload should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(********)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("********")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Raw contents of the data file. Every key is optional so that flags and
/// environment variables can fill in the gaps.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub number_of_gmsa_accounts: Option<u32>,
    pub netbios_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<Password>,
    pub directory_name: Option<String>,
}

impl ConfigFile {
    /// Parse a data file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, or a parse
    /// error if its contents are malformed.
    pub fn read(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading config file");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let file = if is_toml {
            toml::from_str(&contents).map_err(ConfigError::ParseToml)?
        } else {
            serde_json::from_str(&contents).map_err(ConfigError::ParseJson)?
        };

        Ok(file)
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub account_count: Option<u32>,
    pub netbios_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<Password>,
    pub directory_name: Option<String>,
}

impl Overrides {
    /// True when every value is supplied, so no data file is needed.
    pub fn is_complete(&self) -> bool {
        self.account_count.is_some()
            && self.netbios_name.is_some()
            && self.username.is_some()
            && self.password.is_some()
            && self.directory_name.is_some()
    }
}

/// Validated provisioning parameters, immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of accounts to provision. Zero is allowed and creates nothing.
    pub account_count: u32,
    /// NetBIOS name of the domain, used in the distinguished name.
    pub netbios_name: String,
    pub username: String,
    pub password: Password,
    /// Directory (DNS domain) name stored as `domainName`.
    pub directory_name: String,
}

impl Config {
    /// Load parameters from the data file at `path` merged with `overrides`.
    ///
    /// Without an explicit path, `data.json` in the current directory is
    /// read if present. It may be absent when the overrides are complete.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing, a file is
    /// malformed, or a value is missing or empty after merging.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match path {
            Some(path) => Some(ConfigFile::read(path)?),
            None => {
                let default = PathBuf::from(constants::DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Some(ConfigFile::read(&default)?)
                } else if overrides.is_complete() {
                    None
                } else {
                    return Err(ConfigError::NotFound(default).into());
                }
            }
        };

        Self::resolve(file.unwrap_or_default(), overrides)
    }

    /// Merge file values with overrides and validate the result.
    ///
    /// Overrides win over file values.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let config = Self {
            account_count: required(
                "number_of_gmsa_accounts",
                overrides.account_count.or(file.number_of_gmsa_accounts),
            )?,
            netbios_name: required("netbios_name", overrides.netbios_name.or(file.netbios_name))?,
            username: required("username", overrides.username.or(file.username))?,
            password: required("password", overrides.password.or(file.password))?,
            directory_name: required(
                "directory_name",
                overrides.directory_name.or(file.directory_name),
            )?,
        };

        config.validate()?;

        debug!(
            accounts = config.account_count,
            netbios = %config.netbios_name,
            directory = %config.directory_name,
            "config loaded"
        );

        Ok(config)
    }

    /// Check that every string value is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("netbios_name", self.netbios_name.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.expose()),
            ("directory_name", self.directory_name.as_str()),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ConfigError::MissingField { field }.into())
}

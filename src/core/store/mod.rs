//! Secret store backends.
//!
//! The provisioner only needs a single create-if-absent call, so the
//! [`SecretStore`] trait is deliberately narrow.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl SecretStore for Vault {
//!     fn name(&self) -> &'static str {
//!         "vault"
//!     }
//!     fn create_secret(&self, name: &str, description: &str, secret_string: &str) -> CreateResult {
//!         // Write to Vault, mapping a conflict to CreateError::AlreadyExists
//!     }
//! }
//! ```

mod aws;
mod memory;

pub use aws::{AwsOptions, AwsSecretsManager};
pub use memory::{Memory, Request};

/// Why a create request did not produce a new secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// A secret with this name already exists.
    AlreadyExists,
    /// Any other failure, with the store's error text.
    Other(String),
}

pub type CreateResult = std::result::Result<(), CreateError>;

/// A named secret store.
pub trait SecretStore {
    /// Backend name used in logs.
    fn name(&self) -> &'static str;

    /// Create a secret unless one with the same name exists.
    ///
    /// Blocks until the store answers.
    ///
    /// # Errors
    ///
    /// Returns `CreateError::AlreadyExists` on a name collision and
    /// `CreateError::Other` for everything else.
    fn create_secret(&self, name: &str, description: &str, secret_string: &str) -> CreateResult;
}

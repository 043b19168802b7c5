//! gmsa-secrets - Provision gMSA domain-join credentials in AWS Secrets Manager.
//!
//! For each account `1..=N` a secret named
//! `aws/directoryservice/contoso/gmsa/WebApp0{i}` is created holding the
//! directory credentials and the account's distinguished name. Existing
//! secrets are left untouched and failures never stop the run.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── provision     # Create secrets in AWS Secrets Manager
//! │   ├── plan          # Show what would be created
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # data.json / flags / env merging
//!     ├── constants     # Naming templates and defaults
//!     ├── secret        # Secret name, DN and payload derivation
//!     ├── store/        # SecretStore trait
//!     │   ├── aws       # AWS Secrets Manager
//!     │   └── memory    # In-memory store
//!     └── provisioner   # Create loop and outcome report
//! ```

pub mod cli;
pub mod core;
pub mod error;

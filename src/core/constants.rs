//! Constants used throughout gmsa-secrets.
//!
//! Centralizes naming templates and configuration defaults.

/// Secrets Manager path under which every account secret is created.
pub const SECRET_BASE_PATH: &str = "aws/directoryservice/contoso/gmsa";

/// Account name prefix. The index is appended as-is, so account 10 is `WebApp010`.
pub const ACCOUNT_PREFIX: &str = "WebApp0";

/// Organizational units between the account CN and the domain OU.
pub const DN_OU_PATH: &str = "OU=MYOU,OU=Users";

/// Top-level domain component of the distinguished name.
pub const DN_TOP_LEVEL: &str = "com";

/// Config file looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "data.json";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GMSA_SECRETS_LOG";

//! Test fixtures and constants.

/// Secrets Manager path prefix for account secrets.
pub const SECRET_PREFIX: &str = "aws/directoryservice/contoso/gmsa/";

/// Password used by the sample data files.
pub const SAMPLE_PASSWORD: &str = "Sup3r-S3cret!";

/// Sample data file with three accounts.
pub const SAMPLE_DATA: &str = r#"{
    "number_of_gmsa_accounts": 3,
    "netbios_name": "CONTOSO",
    "username": "StandardUser01",
    "password": "Sup3r-S3cret!",
    "directory_name": "contoso.com"
}"#;

/// Sample data file with no accounts.
pub const EMPTY_DATA: &str = r#"{
    "number_of_gmsa_accounts": 0,
    "netbios_name": "CONTOSO",
    "username": "StandardUser01",
    "password": "Sup3r-S3cret!",
    "directory_name": "contoso.com"
}"#;

/// Sample data file in TOML.
pub const SAMPLE_TOML: &str = r#"
number_of_gmsa_accounts = 2
netbios_name = "FABRIKAM"
username = "svc-gmsa"
password = "Sup3r-S3cret!"
directory_name = "fabrikam.com"
"#;

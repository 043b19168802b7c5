//! gmsa-secrets - Provision gMSA credential secrets in AWS Secrets Manager.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gmsa_secrets::cli::output;
use gmsa_secrets::cli::{execute, Cli};
use gmsa_secrets::core::constants;
use gmsa_secrets::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gmsa_secrets=debug")
        } else {
            EnvFilter::new("gmsa_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => {
                Some("pass --config <path> or create data.json in the current directory")
            }
            Error::Config(ConfigError::MissingField { .. }) => {
                Some("add it to the data file or pass it as a flag (see --help)")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

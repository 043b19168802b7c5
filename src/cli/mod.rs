//! Command-line interface.

pub mod completions;
pub mod output;
pub mod plan;
pub mod provision;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{Overrides, Password};
use crate::core::store::AwsOptions;

/// gmsa-secrets - Provision gMSA credential secrets in AWS Secrets Manager.
#[derive(Parser)]
#[command(
    name = "gmsa-secrets",
    about = "Provision gMSA domain-join credential secrets in AWS Secrets Manager",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create one secret per gMSA account, skipping ones that exist
    Provision {
        #[command(flatten)]
        params: ParamArgs,
        #[command(flatten)]
        aws: AwsArgs,
    },

    /// Show the secrets that would be created without contacting AWS
    Plan {
        #[command(flatten)]
        params: ParamArgs,
        /// Output as JSON (passwords omitted)
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Provisioning parameters. Flags and environment variables override the
/// data file.
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Data file with the provisioning parameters (JSON, or TOML by extension)
    #[arg(short, long, env = "GMSA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of gMSA accounts to provision
    #[arg(long = "accounts", env = "GMSA_ACCOUNT_COUNT")]
    pub account_count: Option<u32>,

    /// NetBIOS name of the domain
    #[arg(long, env = "GMSA_NETBIOS_NAME")]
    pub netbios_name: Option<String>,

    /// Directory user stored in each secret
    #[arg(long, env = "GMSA_USERNAME")]
    pub username: Option<String>,

    /// Directory password stored in each secret
    #[arg(long, env = "GMSA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Directory (DNS domain) name stored as domainName
    #[arg(long, env = "GMSA_DIRECTORY_NAME")]
    pub directory_name: Option<String>,
}

impl ParamArgs {
    /// Split into the data file path and the value overrides.
    pub fn into_parts(self) -> (Option<PathBuf>, Overrides) {
        let overrides = Overrides {
            account_count: self.account_count,
            netbios_name: self.netbios_name,
            username: self.username,
            password: self.password.map(Password::new),
            directory_name: self.directory_name,
        };
        (self.config, overrides)
    }
}

/// AWS connection overrides.
#[derive(Args, Debug, Default)]
pub struct AwsArgs {
    /// AWS region (defaults to the provider chain)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom Secrets Manager endpoint, e.g. LocalStack
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

impl From<AwsArgs> for AwsOptions {
    fn from(args: AwsArgs) -> Self {
        Self {
            region: args.region,
            endpoint_url: args.endpoint_url,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Provision { params, aws } => provision::execute(params, aws.into()),
        Plan { params, json } => plan::execute(params, json),
        Completions { shell } => completions::execute(shell),
    }
}

//! Provision command - create the account secrets in AWS Secrets Manager.

use tracing::info;

use crate::cli::{output, ParamArgs};
use crate::core::config::Config;
use crate::core::provisioner::Provisioner;
use crate::core::store::{AwsOptions, AwsSecretsManager};
use crate::error::Result;

/// Create one secret per account.
///
/// Per-secret collisions and failures are printed and do not change the
/// exit status; only setup errors (bad config, no runtime) are returned.
pub fn execute(params: ParamArgs, aws: AwsOptions) -> Result<()> {
    let (path, overrides) = params.into_parts();
    let config = Config::load(path.as_deref(), overrides)?;

    let store = AwsSecretsManager::connect(&aws)?;
    let report = Provisioner::new(&store).run(&config, output::item);

    output::summary(&report);
    info!(
        created = report.created(),
        existing = report.already_existed(),
        failed = report.failed(),
        "provision complete"
    );
    Ok(())
}

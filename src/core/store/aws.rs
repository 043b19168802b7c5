//! AWS Secrets Manager store.
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, etc.)
//! or from the default credential provider chain. Region and endpoint can be
//! overridden, which is how the tool is pointed at LocalStack.

use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::{CreateError, CreateResult, SecretStore};
use crate::error::{Result, StoreError};

/// Connection overrides for the AWS client.
#[derive(Debug, Clone, Default)]
pub struct AwsOptions {
    /// Region to use instead of the one from the provider chain.
    pub region: Option<String>,
    /// Custom endpoint, e.g. `http://localhost:4566`.
    pub endpoint_url: Option<String>,
}

/// AWS Secrets Manager backend.
///
/// The SDK is async; a single current-thread runtime drives every request
/// so calls stay sequential.
pub struct AwsSecretsManager {
    runtime: tokio::runtime::Runtime,
    client: Client,
}

impl AwsSecretsManager {
    /// Load AWS configuration and build a client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the tokio runtime cannot be created.
    pub fn connect(options: &AwsOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        let client = runtime.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = &options.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(endpoint) = &options.endpoint_url {
                loader = loader.endpoint_url(endpoint.clone());
            }
            let config = loader.load().await;

            debug!(
                region = ?config.region().map(|r| r.to_string()),
                endpoint = ?options.endpoint_url,
                "loaded AWS config"
            );

            Client::new(&config)
        });

        Ok(Self { runtime, client })
    }
}

impl SecretStore for AwsSecretsManager {
    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }

    fn create_secret(&self, name: &str, description: &str, secret_string: &str) -> CreateResult {
        trace!(name, payload_len = secret_string.len(), "CreateSecret");

        let result = self.runtime.block_on(
            self.client
                .create_secret()
                .name(name)
                .description(description)
                .secret_string(secret_string)
                .send(),
        );

        match result {
            Ok(output) => {
                trace!(arn = ?output.arn(), "secret created");
                Ok(())
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_exists_exception()) =>
            {
                Err(CreateError::AlreadyExists)
            }
            Err(err) => Err(CreateError::Other(DisplayErrorContext(&err).to_string())),
        }
    }
}

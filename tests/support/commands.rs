//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Endpoint that refuses connections, so every request fails fast.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9";

impl Test {
    /// Create a gmsa-secrets command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test directory
    /// - Colors disabled and no inherited GMSA_* overrides
    /// - Static dummy AWS credentials
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("gmsa-secrets").expect("failed to find gmsa-secrets binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in [
            "GMSA_CONFIG",
            "GMSA_ACCOUNT_COUNT",
            "GMSA_NETBIOS_NAME",
            "GMSA_USERNAME",
            "GMSA_PASSWORD",
            "GMSA_DIRECTORY_NAME",
            "GMSA_SECRETS_LOG",
            "AWS_PROFILE",
            "AWS_ENDPOINT_URL",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("AWS_ACCESS_KEY_ID", "test");
        cmd.env("AWS_SECRET_ACCESS_KEY", "test");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `gmsa-secrets plan`.
    pub fn plan(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("plan")
            .args(args)
            .output()
            .expect("failed to run gmsa-secrets plan")
    }

    /// Shortcut for `gmsa-secrets provision` against an unreachable endpoint.
    pub fn provision_offline(&self, args: &[&str]) -> Output {
        self.cmd()
            .args([
                "provision",
                "--region",
                "us-east-1",
                "--endpoint-url",
                UNREACHABLE_ENDPOINT,
            ])
            .args(args)
            .output()
            .expect("failed to run gmsa-secrets provision")
    }
}

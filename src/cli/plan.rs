//! Plan command - list the secrets a provision run would create.

use serde::Serialize;

use crate::cli::{output, ParamArgs};
use crate::core::config::Config;
use crate::core::provisioner;
use crate::core::secret::SecretRecord;
use crate::error::Result;

/// JSON view of a planned secret. The password is left out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlannedSecret<'a> {
    name: &'a str,
    description: &'a str,
    username: &'a str,
    domain_name: &'a str,
    distinguished_name: &'a str,
}

impl<'a> From<&'a SecretRecord> for PlannedSecret<'a> {
    fn from(record: &'a SecretRecord) -> Self {
        Self {
            name: &record.name,
            description: &record.description,
            username: &record.value.username,
            domain_name: &record.value.domain_name,
            distinguished_name: &record.value.distinguished_name,
        }
    }
}

/// Print the planned secrets.
pub fn execute(params: ParamArgs, json: bool) -> Result<()> {
    let (path, overrides) = params.into_parts();
    let config = Config::load(path.as_deref(), overrides)?;
    let records = provisioner::plan(&config);

    if json {
        let planned: Vec<PlannedSecret> = records.iter().map(PlannedSecret::from).collect();
        println!("{}", serde_json::to_string_pretty(&planned)?);
        return Ok(());
    }

    if records.is_empty() {
        output::dimmed("no secrets to create");
        return Ok(());
    }

    output::section(&format!("Secrets ({})", records.len()));
    for record in &records {
        println!("{}", output::name(&record.name));
        output::kv("description:", &record.description);
        output::kv("username:   ", &record.value.username);
        output::kv("domainName: ", &record.value.domain_name);
        output::kv("dn:         ", &record.value.distinguished_name);
    }

    Ok(())
}

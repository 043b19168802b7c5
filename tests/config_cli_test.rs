//! Tests for configuration errors and CLI flags.

mod support;
use predicates::prelude::*;
use support::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provision"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_default_data_file() {
    let t = Test::new();

    let output = t.plan(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found: data.json");
    assert_stderr_contains(&output, "--config");
}

#[test]
fn test_missing_explicit_data_file() {
    let t = Test::new();

    let output = t.plan(&["--config", "missing.json"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing.json");
}

#[test]
fn test_missing_field() {
    let t = Test::with_data(r#"{"number_of_gmsa_accounts": 1, "netbios_name": "CONTOSO"}"#);

    let output = t.plan(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required value: username");
}

#[test]
fn test_missing_field_supplied_by_flag() {
    let t = Test::with_data(r#"{"number_of_gmsa_accounts": 1, "netbios_name": "CONTOSO"}"#);

    let output = t.plan(&[
        "--username",
        "u",
        "--password",
        "p",
        "--directory-name",
        "contoso.com",
    ]);
    assert_success(&output);
}

#[test]
fn test_empty_value_rejected() {
    let t = Test::with_data(&SAMPLE_DATA.replace("StandardUser01", ""));

    let output = t.plan(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid value for username");
}

#[test]
fn test_malformed_json() {
    let t = Test::with_data("{ not json");

    let output = t.plan(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid JSON");
}

#[test]
fn test_negative_account_count_rejected() {
    let t = Test::with_data(&SAMPLE_DATA.replace(
        "\"number_of_gmsa_accounts\": 3",
        "\"number_of_gmsa_accounts\": -2",
    ));

    let output = t.plan(&[]);
    assert_failure(&output);
}

#[test]
fn test_provision_config_error_fails_before_aws() {
    let t = Test::new();

    let output = t.provision_offline(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
    assert!(!stdout(&output).contains("Error creating secret"));
}

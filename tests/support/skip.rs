/// Skip a test unless AWS credentials are configured and the run opted in.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID not set");
            return;
        }
        if std::env::var("GMSA_TEST_AWS").is_err() {
            eprintln!("SKIPPED: GMSA_TEST_AWS not set (creates real secrets)");
            return;
        }
    };
}

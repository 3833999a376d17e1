use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cp_profile_scraper::{FailureResponse, ProfileClient};

/// Look up a competitive programming profile and print it as JSON.
#[derive(Debug, Parser)]
struct Args {
    /// Platform tag: codeforces, spoj or atcoder.
    platform: String,
    username: String,
    /// Request timeout in seconds.
    #[arg(long, env = "CP_PROFILE_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,
    #[arg(long, env = "CP_PROFILE_USER_AGENT", default_value = "cp-profile-scraper/0.1")]
    user_agent: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = match ProfileClient::with_settings(
        Duration::from_secs(args.timeout_secs),
        &args.user_agent,
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to build http client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match client.lookup(&args.platform, &args.username).await {
        Ok(profile) => {
            println!("{}", serde_json::to_string_pretty(&profile).unwrap());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "lookup failed");
            let body = FailureResponse::from(&e);
            println!("{}", serde_json::to_string_pretty(&body).unwrap());
            ExitCode::FAILURE
        }
    }
}

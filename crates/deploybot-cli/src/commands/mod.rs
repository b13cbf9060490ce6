//! CLI command implementations.

pub mod deployments;
pub mod environments;
pub mod repositories;
pub mod servers;
pub mod users;

use anyhow::{Context, Result};
use deploybot_client::{ClientConfig, Credentials, DeployBotClient};
use serde_json::Value;
use tracing::debug;

/// Build a client from explicit flags, falling back to the profile file.
///
/// A named `account` always comes from the profile file, even when a
/// subdomain and token are also set.
pub fn connect(
    subdomain: Option<&str>,
    token: Option<&str>,
    config_path: &str,
    account: Option<&str>,
) -> Result<DeployBotClient> {
    let credentials = match (subdomain, token) {
        (Some(subdomain), Some(token)) if account.is_none() => Credentials::new(subdomain, token)?,
        _ => {
            debug!(path = config_path, "Loading account profiles");
            let accounts = deploybot_config::load_accounts(config_path)
                .with_context(|| format!("Failed to load account profiles from {}", config_path))?;
            accounts
                .credentials(account)
                .with_context(|| format!("Failed to resolve account from {}", config_path))?
        }
    };

    let config = ClientConfig::new(credentials)
        .user_agent(concat!("deploybot-cli/", env!("CARGO_PKG_VERSION")));
    Ok(DeployBotClient::from_config(config))
}

/// Pretty-print a response on stdout.
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

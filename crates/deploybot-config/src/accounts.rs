//! Account profile parsing.
//!
//! ```kdl
//! default "acme"
//!
//! account "acme" {
//!     token "0123456789abcdef"
//! }
//!
//! account "staging" subdomain="acme-staging" {
//!     token-env "DEPLOYBOT_STAGING_TOKEN"
//! }
//! ```

use crate::{ConfigError, ConfigResult};
use deploybot_core::Credentials;
use kdl::{KdlDocument, KdlNode};
use std::fmt;
use std::path::Path;

/// Where a profile's API token comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Token written directly in the file.
    Literal(String),
    /// Name of an environment variable holding the token.
    Env(String),
}

impl fmt::Debug for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Literal(_) => f.write_str("Literal(***)"),
            TokenSource::Env(var) => f.debug_tuple("Env").field(var).finish(),
        }
    }
}

/// A named DeployBot account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub name: String,
    pub subdomain: String,
    pub token: TokenSource,
}

impl AccountProfile {
    /// Resolve the token and validate the result into credentials.
    ///
    /// `lookup` reads environment variables; pass `|var| std::env::var(var).ok()`
    /// for the process environment.
    pub fn credentials_with<F>(&self, lookup: F) -> ConfigResult<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = match &self.token {
            TokenSource::Literal(token) => token.clone(),
            TokenSource::Env(var) => {
                lookup(var).ok_or_else(|| ConfigError::MissingEnv(var.clone()))?
            }
        };
        Ok(Credentials::new(self.subdomain.clone(), token)?)
    }
}

/// All profiles from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountsConfig {
    pub default: Option<String>,
    pub accounts: Vec<AccountProfile>,
}

impl AccountsConfig {
    /// Pick a profile: the requested one, else the declared default, else the only one.
    pub fn profile(&self, name: Option<&str>) -> ConfigResult<&AccountProfile> {
        let wanted = match name.or(self.default.as_deref()) {
            Some(wanted) => wanted,
            None => match self.accounts.as_slice() {
                [only] => return Ok(only),
                [] => return Err(ConfigError::MissingField("account".to_string())),
                _ => return Err(ConfigError::MissingField("default account".to_string())),
            },
        };

        self.accounts
            .iter()
            .find(|a| a.name == wanted)
            .ok_or_else(|| ConfigError::UnknownAccount(wanted.to_string()))
    }

    /// Credentials for a profile, reading token variables from the process environment.
    pub fn credentials(&self, name: Option<&str>) -> ConfigResult<Credentials> {
        self.profile(name)?
            .credentials_with(|var| std::env::var(var).ok())
    }
}

/// Parse account profiles from KDL text.
pub fn parse_accounts(kdl: &str) -> ConfigResult<AccountsConfig> {
    let doc: KdlDocument = kdl.parse()?;

    let mut default = None;
    let mut accounts: Vec<AccountProfile> = Vec::new();

    for node in doc.nodes() {
        match node.name().value() {
            "default" => {
                let name = get_first_string_arg(node).ok_or_else(|| {
                    ConfigError::MissingField("default account name".to_string())
                })?;
                default = Some(name);
            }
            "account" => {
                let account = parse_account(node)?;
                if accounts.iter().any(|a| a.name == account.name) {
                    return Err(ConfigError::Duplicate(format!("account '{}'", account.name)));
                }
                accounts.push(account);
            }
            _ => {} // Ignore unknown nodes
        }
    }

    if let Some(name) = &default {
        if !accounts.iter().any(|a| &a.name == name) {
            return Err(ConfigError::UnknownAccount(name.clone()));
        }
    }

    Ok(AccountsConfig { default, accounts })
}

/// Read and parse an account profile file.
pub fn load_accounts(path: impl AsRef<Path>) -> ConfigResult<AccountsConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_accounts(&content)
}

fn parse_account(node: &KdlNode) -> ConfigResult<AccountProfile> {
    let name = get_first_string_arg(node)
        .ok_or_else(|| ConfigError::MissingField("account name".to_string()))?;
    let subdomain = get_string_prop(node, "subdomain").unwrap_or_else(|| name.clone());

    let mut literal = None;
    let mut env = None;

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "token" => literal = get_first_string_arg(child),
                "token-env" | "token_env" => env = get_first_string_arg(child),
                _ => {}
            }
        }
    }

    let token = match (literal, env) {
        (Some(token), None) => TokenSource::Literal(token),
        (None, Some(var)) => TokenSource::Env(var),
        (Some(_), Some(_)) => {
            return Err(ConfigError::InvalidValue {
                field: format!("token for account '{}'", name),
                message: "set either token or token-env, not both".to_string(),
            });
        }
        (None, None) => {
            return Err(ConfigError::MissingField(format!(
                "token for account '{}'",
                name
            )));
        }
    };

    Ok(AccountProfile {
        name,
        subdomain,
        token,
    })
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn get_string_prop(node: &KdlNode, name: &str) -> Option<String> {
    node.get(name)
        .and_then(|v| v.as_string())
        .map(|s| s.to_string())
}

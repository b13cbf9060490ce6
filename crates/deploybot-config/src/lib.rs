//! KDL configuration for the DeployBot API client.
//!
//! This crate handles parsing of account profiles (deploybot.kdl) and
//! resolving them into validated credentials.

pub mod accounts;
pub mod error;

pub use accounts::{AccountProfile, AccountsConfig, TokenSource, load_accounts, parse_accounts};
pub use error::{ConfigError, ConfigResult};

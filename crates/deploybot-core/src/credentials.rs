//! Account credentials.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

use crate::{Error, Result};

/// A subdomain has to be usable as a single hostname label.
static SUBDOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?$").expect("Invalid regex pattern")
});

/// A DeployBot API token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Expose the raw token for the auth header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// The subdomain and token a client talks to DeployBot with.
///
/// Validated once on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    subdomain: String,
    api_token: ApiToken,
    base_url: Url,
}

impl Credentials {
    pub fn new(subdomain: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let subdomain = subdomain.into().trim().to_string();
        let api_token = api_token.into().trim().to_string();

        if subdomain.is_empty() {
            return Err(Error::Configuration("subdomain is required".to_string()));
        }
        if !SUBDOMAIN_PATTERN.is_match(&subdomain) {
            return Err(Error::Configuration(format!(
                "subdomain '{}' is not a valid hostname label",
                subdomain
            )));
        }
        if api_token.is_empty() {
            return Err(Error::Configuration("API token is required".to_string()));
        }
        // Sent verbatim as a header value.
        if !api_token.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(Error::Configuration(
                "API token may only contain visible ASCII characters".to_string(),
            ));
        }

        let base_url = Url::parse(&format!("https://{}.deploybot.com/api/v1/", subdomain))
            .map_err(|e| Error::Configuration(format!("invalid base URL: {}", e)))?;

        Ok(Self {
            subdomain,
            api_token: ApiToken(api_token),
            base_url,
        })
    }

    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// `https://{subdomain}.deploybot.com/api/v1/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

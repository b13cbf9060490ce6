//! Options for triggering a deployment.

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Params, ResourceId, Result};

/// Optional settings for a triggered deployment.
///
/// Unset fields are left out of the request entirely, so DeployBot applies
/// its own defaults (the account owner as the deployer, the latest revision,
/// an incremental deploy, notifications on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeploymentOptions {
    /// User the deployment runs as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<ResourceId>,
    /// Commit to deploy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployed_version: Option<String>,
    /// Upload every file instead of only the changed ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_from_scratch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DeploymentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: impl Into<ResourceId>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn deployed_version(mut self, revision: impl Into<String>) -> Self {
        self.deployed_version = Some(revision.into());
        self
    }

    pub fn deploy_from_scratch(mut self, from_scratch: bool) -> Self {
        self.deploy_from_scratch = Some(from_scratch);
        self
    }

    pub fn trigger_notifications(mut self, notify: bool) -> Self {
        self.trigger_notifications = Some(notify);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Build the request body for deploying to `environment_id`.
    pub fn to_params(&self, environment_id: &ResourceId) -> Result<Params> {
        if environment_id.is_blank() {
            return Err(Error::Validation("environment id is required".to_string()));
        }
        if self.user_id.as_ref().is_some_and(ResourceId::is_blank) {
            return Err(Error::Validation("user id must not be empty".to_string()));
        }

        let mut params = Params::new().with("environment_id", environment_id);
        if let Value::Object(fields) = serde_json::to_value(self)? {
            for (key, value) in fields {
                params.insert(key, value);
            }
        }
        Ok(params)
    }
}

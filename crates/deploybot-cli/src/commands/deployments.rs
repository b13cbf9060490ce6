//! Deployment commands.

use anyhow::{Context, Result};
use deploybot_client::{DeployBotClient, DeploymentOptions, PageRequest, ResourceId};

use super::print_json;

pub async fn list(
    client: &DeployBotClient,
    repository: ResourceId,
    environment: ResourceId,
    page: PageRequest,
) -> Result<()> {
    let deployments = client
        .list_deployments(repository, environment, page)
        .await
        .context("Failed to list deployments")?;
    print_json(&deployments)
}

pub async fn show(client: &DeployBotClient, id: ResourceId) -> Result<()> {
    let deployment = client
        .get_deployment(id.clone())
        .await
        .with_context(|| format!("Failed to get deployment {}", id))?;
    print_json(&deployment)
}

/// Map trigger flags to options. Flags left at their defaults are not sent.
pub fn trigger_options(
    user: Option<ResourceId>,
    revision: Option<String>,
    from_scratch: bool,
    no_notifications: bool,
    comment: Option<String>,
) -> DeploymentOptions {
    DeploymentOptions {
        user_id: user,
        deployed_version: revision,
        deploy_from_scratch: from_scratch.then_some(true),
        trigger_notifications: no_notifications.then_some(false),
        comment,
    }
}

pub async fn trigger(
    client: &DeployBotClient,
    environment: ResourceId,
    options: DeploymentOptions,
) -> Result<()> {
    let deployment = client
        .trigger_deployment(environment.clone(), options)
        .await
        .with_context(|| format!("Failed to trigger deployment to environment {}", environment))?;
    print_json(&deployment)
}

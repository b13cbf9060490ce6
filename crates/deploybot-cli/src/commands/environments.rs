//! Environment commands.

use anyhow::{Context, Result};
use deploybot_client::{DeployBotClient, PageRequest, ResourceId};

use super::print_json;

pub async fn list(
    client: &DeployBotClient,
    repository: Option<ResourceId>,
    page: PageRequest,
) -> Result<()> {
    let environments = client
        .list_environments(repository, page)
        .await
        .context("Failed to list environments")?;
    print_json(&environments)
}

pub async fn show(client: &DeployBotClient, id: ResourceId) -> Result<()> {
    let environment = client
        .get_environment(id.clone())
        .await
        .with_context(|| format!("Failed to get environment {}", id))?;
    print_json(&environment)
}

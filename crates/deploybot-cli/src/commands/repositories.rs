//! Repository commands.

use anyhow::{Context, Result};
use deploybot_client::{DeployBotClient, PageRequest, ResourceId};

use super::print_json;

pub async fn list(client: &DeployBotClient, page: PageRequest) -> Result<()> {
    let repositories = client
        .list_repositories(page)
        .await
        .context("Failed to list repositories")?;
    print_json(&repositories)
}

pub async fn show(client: &DeployBotClient, id: ResourceId) -> Result<()> {
    let repository = client
        .get_repository(id.clone())
        .await
        .with_context(|| format!("Failed to get repository {}", id))?;
    print_json(&repository)
}

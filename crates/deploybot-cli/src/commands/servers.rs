//! Server commands.

use anyhow::{Context, Result};
use deploybot_client::{DeployBotClient, PageRequest, ResourceId};

use super::print_json;

pub async fn list(
    client: &DeployBotClient,
    repository: Option<ResourceId>,
    environment: Option<ResourceId>,
    page: PageRequest,
) -> Result<()> {
    let servers = client
        .list_servers(repository, environment, page)
        .await
        .context("Failed to list servers")?;
    print_json(&servers)
}

pub async fn show(client: &DeployBotClient, id: ResourceId) -> Result<()> {
    let server = client
        .get_server(id.clone())
        .await
        .with_context(|| format!("Failed to get server {}", id))?;
    print_json(&server)
}

//! User commands.

use anyhow::{Context, Result};
use deploybot_client::{DeployBotClient, PageRequest, ResourceId};

use super::print_json;

pub async fn list(client: &DeployBotClient, page: PageRequest) -> Result<()> {
    let users = client.get_users(page).await.context("Failed to list users")?;
    print_json(&users)
}

pub async fn show(client: &DeployBotClient, id: ResourceId) -> Result<()> {
    let user = client
        .get_user(id.clone())
        .await
        .with_context(|| format!("Failed to get user {}", id))?;
    print_json(&user)
}

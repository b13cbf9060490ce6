//! Repositories.

use deploybot_core::{ApiRequest, PageRequest, Params, ResourceId, Result};
use serde_json::Value;

use crate::DeployBotClient;
use crate::client::{require_id, resource_path};

impl DeployBotClient {
    pub async fn get_repository(&self, repository_id: impl Into<ResourceId>) -> Result<Value> {
        let repository_id = repository_id.into();
        require_id(&repository_id, "repository")?;

        self.execute(ApiRequest::get(resource_path("repositories", &repository_id)))
            .await
    }

    pub async fn list_repositories(&self, page: PageRequest) -> Result<Value> {
        let mut params = Params::new();
        page.apply(&mut params);

        self.execute(ApiRequest::get("repositories").with_params(params))
            .await
    }
}

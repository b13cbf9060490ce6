//! Servers.

use deploybot_core::{ApiRequest, PageRequest, Params, ResourceId, Result};
use serde_json::Value;

use crate::DeployBotClient;
use crate::client::{require_id, resource_path};

impl DeployBotClient {
    pub async fn get_server(&self, server_id: impl Into<ResourceId>) -> Result<Value> {
        let server_id = server_id.into();
        require_id(&server_id, "server")?;

        self.execute(ApiRequest::get(resource_path("servers", &server_id)))
            .await
    }

    /// List servers, optionally narrowed to a repository and/or environment.
    pub async fn list_servers(
        &self,
        repository_id: Option<ResourceId>,
        environment_id: Option<ResourceId>,
        page: PageRequest,
    ) -> Result<Value> {
        let mut params = Params::new()
            .with("repository_id", repository_id.as_ref())
            .with("environment_id", environment_id.as_ref());
        page.apply(&mut params);

        self.execute(ApiRequest::get("servers").with_params(params))
            .await
    }
}

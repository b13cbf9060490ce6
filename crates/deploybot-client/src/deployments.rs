//! Deployments.

use deploybot_core::{ApiRequest, DeploymentOptions, PageRequest, Params, ResourceId, Result};
use serde_json::Value;
use tracing::info;

use crate::DeployBotClient;
use crate::client::{require_id, resource_path};

impl DeployBotClient {
    /// List deployments of a repository to one of its environments.
    pub async fn list_deployments(
        &self,
        repository_id: impl Into<ResourceId>,
        environment_id: impl Into<ResourceId>,
        page: PageRequest,
    ) -> Result<Value> {
        let repository_id = repository_id.into();
        let environment_id = environment_id.into();
        require_id(&repository_id, "repository")?;
        require_id(&environment_id, "environment")?;

        let mut params = Params::new()
            .with("repository_id", &repository_id)
            .with("environment_id", &environment_id);
        page.apply(&mut params);

        self.execute(ApiRequest::get("deployments").with_params(params))
            .await
    }

    /// Fetch a single deployment.
    pub async fn get_deployment(&self, deployment_id: impl Into<ResourceId>) -> Result<Value> {
        let deployment_id = deployment_id.into();
        require_id(&deployment_id, "deployment")?;

        self.execute(ApiRequest::get(resource_path("deployments", &deployment_id)))
            .await
    }

    /// Trigger a deployment to an environment.
    ///
    /// Only the options that are set are sent; DeployBot fills in the rest.
    pub async fn trigger_deployment(
        &self,
        environment_id: impl Into<ResourceId>,
        options: DeploymentOptions,
    ) -> Result<Value> {
        let environment_id = environment_id.into();
        let params = options.to_params(&environment_id)?;

        info!(environment = %environment_id, "Triggering DeployBot deployment");
        self.execute(ApiRequest::post("deployments").with_params(params))
            .await
    }
}

//! Environments.

use deploybot_core::{ApiRequest, PageRequest, Params, ResourceId, Result};
use serde_json::Value;

use crate::DeployBotClient;
use crate::client::{require_id, resource_path};

impl DeployBotClient {
    pub async fn get_environment(&self, environment_id: impl Into<ResourceId>) -> Result<Value> {
        let environment_id = environment_id.into();
        require_id(&environment_id, "environment")?;

        self.execute(ApiRequest::get(resource_path("environments", &environment_id)))
            .await
    }

    /// List environments, optionally only those of one repository.
    pub async fn list_environments(
        &self,
        repository_id: Option<ResourceId>,
        page: PageRequest,
    ) -> Result<Value> {
        let mut params = Params::new().with("repository_id", repository_id.as_ref());
        page.apply(&mut params);

        self.execute(ApiRequest::get("environments").with_params(params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{MockTransport, client_with};
    use deploybot_core::{Error, PageRequest, ResourceId};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_environment() {
        let (client, transport) = client_with(MockTransport::ok(json!({"id": 4})));

        client.get_environment(4u64).await.unwrap();

        assert_eq!(transport.only_request().url.path(), "/api/v1/environments/4");
    }

    #[tokio::test]
    async fn test_get_environment_blank_id() {
        let (client, transport) = client_with(MockTransport::ok(json!({})));

        let err = client.get_environment("").await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_environments_omits_missing_repository() {
        let (client, transport) = client_with(MockTransport::ok(json!({"entries": []})));

        client
            .list_environments(None, PageRequest::new(15))
            .await
            .unwrap();

        assert_eq!(
            transport.only_query(),
            vec![("limit".to_string(), "15".to_string())]
        );
    }

    #[tokio::test]
    async fn test_list_environments_for_repository() {
        let (client, transport) = client_with(MockTransport::ok(json!({"entries": []})));

        client
            .list_environments(
                Some(ResourceId::from(8u64)),
                PageRequest::default().after("e-1"),
            )
            .await
            .unwrap();

        assert_eq!(
            transport.only_query(),
            vec![
                ("repository_id".to_string(), "8".to_string()),
                ("limit".to_string(), "50".to_string()),
                ("after".to_string(), "e-1".to_string()),
            ]
        );
    }
}

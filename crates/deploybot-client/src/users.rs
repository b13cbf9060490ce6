//! Users.

use deploybot_core::{ApiRequest, PageRequest, Params, ResourceId, Result};
use serde_json::Value;

use crate::DeployBotClient;
use crate::client::{require_id, resource_path};

impl DeployBotClient {
    /// List the account's users.
    pub async fn get_users(&self, page: PageRequest) -> Result<Value> {
        let mut params = Params::new();
        page.apply(&mut params);

        self.execute(ApiRequest::get("users").with_params(params))
            .await
    }

    /// Fetch a single user.
    pub async fn get_user(&self, user_id: impl Into<ResourceId>) -> Result<Value> {
        let user_id = user_id.into();
        require_id(&user_id, "user")?;

        self.execute(ApiRequest::get(resource_path("users", &user_id)))
            .await
    }
}

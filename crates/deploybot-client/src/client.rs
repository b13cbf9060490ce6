//! DeployBot client and its request executor.

use bytes::Bytes;
use deploybot_core::{
    ApiRequest, Credentials, Error, HttpMethod, HttpRequest, ResourceId, Result, Transport,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::transport::ReqwestTransport;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("deploybot-rs/", env!("CARGO_PKG_VERSION"));

/// Everything needed to build a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            user_agent: None,
        }
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// DeployBot API client.
///
/// Holds immutable credentials and a shared transport, so clones are cheap
/// and a single client can serve concurrent callers.
#[derive(Clone)]
pub struct DeployBotClient {
    credentials: Credentials,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for DeployBotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployBotClient")
            .field("credentials", &self.credentials)
            .field("user_agent", &self.user_agent)
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl DeployBotClient {
    /// Create a client for `subdomain` using the default reqwest transport.
    pub fn new(subdomain: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        let credentials = Credentials::new(subdomain, api_token)?;
        Ok(Self::from_config(ClientConfig::new(credentials)))
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new());
        let mut client = Self::with_transport(config.credentials, transport);
        if let Some(user_agent) = config.user_agent {
            client.user_agent = user_agent;
        }
        client
    }

    /// Create a client over any transport.
    pub fn with_transport(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Execute a request and decode the response.
    ///
    /// Every operation goes through here. Status 200 returns the decoded body
    /// unchanged; anything else is an [`Error::Api`].
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let http_request = self.build_http_request(&request)?;

        debug!(
            method = %request.method,
            path = %request.path,
            params = request.params.len(),
            "Sending DeployBot request"
        );

        let response = match self.transport.send(http_request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    method = %request.method,
                    path = %request.path,
                    kind = ?e.kind,
                    "DeployBot unreachable: {}",
                    e
                );
                return Err(e.into());
            }
        };

        if response.status != 200 {
            warn!(
                method = %request.method,
                path = %request.path,
                status = response.status,
                "DeployBot request failed"
            );
            return Err(Error::api(response.status));
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %request.path, "DeployBot returned an empty body");
            return Ok(Value::Null);
        }

        let value: Value = serde_json::from_slice(&response.body)?;
        debug!(path = %request.path, "DeployBot request succeeded");
        Ok(value)
    }

    /// Turn an API request into the HTTP request handed to the transport.
    pub fn build_http_request(&self, request: &ApiRequest) -> Result<HttpRequest> {
        let mut url = self.endpoint(&request.path)?;

        let mut headers = vec![
            (
                "X-Api-Token".to_string(),
                self.credentials.api_token().expose().to_string(),
            ),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.user_agent.clone()),
        ];

        let body = match request.method {
            HttpMethod::Get => {
                if !request.params.is_empty() {
                    url.query_pairs_mut()
                        .extend_pairs(request.params.to_query_pairs());
                }
                None
            }
            HttpMethod::Post => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(Bytes::from(request.params.to_json().to_string()))
            }
        };

        Ok(HttpRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.credentials
            .base_url()
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::Validation(format!("invalid request path '{}': {}", path, e)))
    }
}

/// `{resource}/{id}` with the id encoded as a single path segment.
pub(crate) fn resource_path(resource: &str, id: &ResourceId) -> String {
    format!("{}/{}", resource, urlencoding::encode(&id.to_string()))
}

/// Reject an id that cannot address a single resource before anything goes
/// over the wire.
///
/// `.` and `..` survive percent-encoding and would be resolved as dot
/// segments by `Url::join`, landing on a list endpoint or the API root.
pub(crate) fn require_id(id: &ResourceId, what: &str) -> Result<()> {
    if id.is_blank() {
        return Err(Error::Validation(format!("{} id is required", what)));
    }
    if id.is_dot_segment() {
        return Err(Error::Validation(format!(
            "{} id '{}' is not a valid path segment",
            what, id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, client_with};
    use deploybot_core::{Params, TransportError};
    use serde_json::json;

    #[test]
    fn test_get_request_shape() {
        let (client, _) = client_with(MockTransport::ok(json!({})));
        let params = Params::new().with("limit", 50).with("after", "c1");
        let request = ApiRequest::get("users").with_params(params);

        let http = client.build_http_request(&request).unwrap();
        assert_eq!(http.method, HttpMethod::Get);
        assert_eq!(
            http.url.as_str(),
            "https://acme.deploybot.com/api/v1/users?limit=50&after=c1"
        );
        assert_eq!(http.header("x-api-token"), Some("test-token"));
        assert_eq!(http.header("Accept"), Some("application/json"));
        assert_eq!(http.header("User-Agent"), Some(DEFAULT_USER_AGENT));
        assert!(http.body.is_none());
    }

    #[test]
    fn test_token_stays_out_of_url() {
        let (client, _) = client_with(MockTransport::ok(json!({})));
        let http = client
            .build_http_request(&ApiRequest::get("repositories"))
            .unwrap();

        assert_eq!(http.url.query(), None);
        assert!(!http.url.as_str().contains("test-token"));
    }

    #[test]
    fn test_post_request_carries_json_body() {
        let (client, _) = client_with(MockTransport::ok(json!({})));
        let request = ApiRequest::post("deployments")
            .with_params(Params::new().with("environment_id", 3));

        let http = client.build_http_request(&request).unwrap();
        assert_eq!(http.url.as_str(), "https://acme.deploybot.com/api/v1/deployments");
        assert_eq!(http.header("Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_slice(http.body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"environment_id": 3}));
    }

    #[test]
    fn test_resource_path_encodes_id() {
        assert_eq!(resource_path("users", &ResourceId::from(5u64)), "users/5");
        assert_eq!(
            resource_path("servers", &ResourceId::from("a/b c")),
            "servers/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_dot_ids_are_rejected_before_sending() {
        let (client, transport) = client_with(MockTransport::ok(json!([{"id": 1}])));

        for id in [".", "..", " .. "] {
            let err = client.get_user(id).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "accepted {:?}", id);
        }
        assert!(transport.requests().is_empty());

        assert_eq!(
            resource_path("users", &ResourceId::from("...")),
            "users/..."
        );
    }

    #[tokio::test]
    async fn test_success_returns_body_unchanged() {
        let payload = json!({"entries": [{"id": 1}], "meta": {"next": "abc"}});
        let (client, _) = client_with(MockTransport::ok(payload.clone()));

        let value = client.execute(ApiRequest::get("users")).await.unwrap();
        assert_eq!(value, payload);
    }

    #[tokio::test]
    async fn test_non_200_maps_to_api_error() {
        for code in [201, 400, 401, 403, 404, 422, 500] {
            let (client, _) = client_with(MockTransport::status(code, "{\"message\":\"nope\"}"));

            let err = client.execute(ApiRequest::get("users")).await.unwrap_err();
            match err {
                Error::Api { code: got, message } => {
                    assert_eq!(got, code);
                    assert_eq!(message, deploybot_core::status_message(code));
                }
                other => panic!("expected API error for {}, got {:?}", code, other),
            }
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_distinct() {
        let (client, _) = client_with(MockTransport::failing(TransportError::timeout(
            "operation timed out",
        )));

        let err = client.execute(ApiRequest::get("users")).await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let (client, _) = client_with(MockTransport::status(200, "<html>oops</html>"));

        let err = client.execute(ApiRequest::get("users")).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        let (client, _) = client_with(MockTransport::status(200, ""));

        let value = client.execute(ApiRequest::get("users")).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_config_user_agent() {
        let credentials = Credentials::new("acme", "t").unwrap();
        let config = ClientConfig::new(credentials).user_agent("my-app/1.0");
        let client = DeployBotClient::from_config(config);
        let http = client.build_http_request(&ApiRequest::get("users")).unwrap();
        assert_eq!(http.header("User-Agent"), Some("my-app/1.0"));
    }

    #[test]
    fn test_new_rejects_missing_credentials() {
        assert!(matches!(
            DeployBotClient::new("", "token"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            DeployBotClient::new("acme", ""),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            DeployBotClient::new("acme", "abc\ndef"),
            Err(Error::Configuration(_))
        ));
    }
}

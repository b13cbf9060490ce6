//! Recording transport for tests.

use async_trait::async_trait;
use deploybot_core::{Credentials, HttpRequest, HttpResponse, Transport, TransportError};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::DeployBotClient;

/// Replies with a canned outcome and remembers every request it was sent.
pub(crate) struct MockTransport {
    outcome: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub(crate) fn ok(body: Value) -> Self {
        Self::status(200, body.to_string())
    }

    pub(crate) fn status(status: u16, body: impl Into<String>) -> Self {
        let body: String = body.into();
        Self {
            outcome: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: TransportError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request sent so far.
    pub(crate) fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    /// Query parameters of the single request sent so far.
    pub(crate) fn only_query(&self) -> Vec<(String, String)> {
        self.only_request()
            .url
            .query_pairs()
            .into_owned()
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcome.clone()
    }
}

/// A client for `acme` with token `test-token` over the given mock.
pub(crate) fn client_with(transport: MockTransport) -> (DeployBotClient, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let credentials = Credentials::new("acme", "test-token").unwrap();
    let client = DeployBotClient::with_transport(credentials, transport.clone());
    (client, transport)
}

/// Parse a POST body back into JSON.
pub(crate) fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_ref().expect("request has no body")).unwrap()
}

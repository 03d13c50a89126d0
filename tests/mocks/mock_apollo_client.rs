use apollo_mcp_server::client::AsyncApolloClient;
use apollo_mcp_server::domain::ApiKey;
use apollo_mcp_server::error::{ApolloApiError, ApolloApiResult, UpstreamOperation};
use apollo_mcp_server::models::UpstreamPayload;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A request the mock received.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: UpstreamOperation,
    pub api_key: String,
    pub payload: UpstreamPayload,
}

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Status(u16, String),
}

/// Mock Apollo client for testing.
///
/// Records every call and answers with a canned reply, so tests can check
/// both the payload sent and how many requests were made.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockApolloClient {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    reply: Arc<Mutex<Reply>>,
}

#[allow(dead_code)]
impl MockApolloClient {
    /// Create a mock that answers `{}` with status 200.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(Reply::Json(Value::Object(Default::default())))),
        }
    }

    /// Answer subsequent calls with `body`.
    pub fn respond_with(&self, body: Value) {
        *self.reply.lock().unwrap() = Reply::Json(body);
    }

    /// Answer subsequent calls with a non-2xx status.
    pub fn fail_with(&self, status: u16, body: &str) {
        *self.reply.lock().unwrap() = Reply::Status(status, body.to_string());
    }

    /// Number of requests made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Payload of the most recent call.
    pub fn last_payload(&self) -> Option<UpstreamPayload> {
        self.calls.lock().unwrap().last().map(|c| c.payload.clone())
    }

    fn record(
        &self,
        operation: UpstreamOperation,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            operation,
            api_key: api_key.expose().to_string(),
            payload: payload.clone(),
        });

        match self.reply.lock().unwrap().clone() {
            Reply::Json(body) => Ok(body),
            Reply::Status(status, body) => Err(ApolloApiError::Upstream {
                operation,
                status,
                body,
            }),
        }
    }
}

impl Default for MockApolloClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncApolloClient for MockApolloClient {
    async fn search_people(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        self.record(UpstreamOperation::PeopleSearch, api_key, payload)
    }

    async fn enrich_organization(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        self.record(UpstreamOperation::OrganizationEnrichment, api_key, payload)
    }
}

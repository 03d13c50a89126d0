//! HTTP client for the Apollo API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every call is a single POST with a JSON body and
//! the API key in the `X-Api-Key` header. Nothing is retried.

mod async_wrapper;
pub use async_wrapper::{AsyncApolloClient, AsyncApolloClientImpl};

use crate::config::Config;
use crate::domain::ApiKey;
use crate::error::{ApolloApiError, ApolloApiResult, UpstreamOperation};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::UpstreamPayload;
use serde_json::Value;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Apollo API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ApolloClient {
    /// Base URL for the Apollo API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ApolloClient {
    /// Create a new ApolloClient from configuration.
    ///
    /// A timeout is only applied when `REQUEST_TIMEOUT` was configured.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create an ApolloClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            agent: Arc::new(ureq::AgentBuilder::new().build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Search people: `POST /mixed_people/search`.
    pub fn search_people(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        self.post(UpstreamOperation::PeopleSearch, api_key, payload)
    }

    /// Enrich an organization: `POST /organizations/enrich`.
    pub fn enrich_organization(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        self.post(UpstreamOperation::OrganizationEnrichment, api_key, payload)
    }

    /// Execute a POST request for `operation` and parse the JSON response.
    fn post(
        &self,
        operation: UpstreamOperation,
        api_key: &ApiKey,
        body: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        let timer = HttpTimer::start(self.metrics.clone(), operation);
        let url = self.build_url(operation.path());

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("X-Api-Key", api_key.expose())
            .send_json(body)
            .map_err(|e| Self::map_error(operation, e))
            .and_then(|response| Self::parse_response(operation, response));

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                tracing::error!("POST {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Turn a response ureq did not treat as an error into JSON.
    ///
    /// ureq only fails on status >= 400, so 1xx and 3xx responses land here
    /// too and are reported as `Upstream`.
    fn parse_response(
        operation: UpstreamOperation,
        response: ureq::Response,
    ) -> ApolloApiResult<Value> {
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(Self::upstream_error(operation, status, response));
        }

        tracing::debug!("{} succeeded (status: {})", operation, status);

        // Streamed so bodies past ureq's 10 MB into_string limit still parse
        serde_json::from_reader(response.into_reader()).map_err(|e| {
            if e.is_io() {
                ApolloApiError::Transport(e.to_string())
            } else {
                ApolloApiError::Json(e)
            }
        })
    }

    /// Build an `Upstream` error carrying the raw response body.
    fn upstream_error(
        operation: UpstreamOperation,
        status: u16,
        response: ureq::Response,
    ) -> ApolloApiError {
        let mut body = String::new();
        if response.into_reader().read_to_string(&mut body).is_err() && body.is_empty() {
            body = "Unknown error".to_string();
        }
        ApolloApiError::Upstream {
            operation,
            status,
            body,
        }
    }

    /// Map a ureq error to an ApolloApiError.
    ///
    /// Together with `parse_response`, every non-2xx status becomes
    /// `Upstream` with the body text untouched.
    fn map_error(operation: UpstreamOperation, error: ureq::Error) -> ApolloApiError {
        match error {
            ureq::Error::Status(status, response) => {
                Self::upstream_error(operation, status, response)
            }
            ureq::Error::Transport(transport) => ApolloApiError::Transport(transport.to_string()),
        }
    }
}

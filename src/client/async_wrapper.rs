//! Async wrapper around synchronous ApolloClient.
//!
//! This module provides an async interface to the synchronous ApolloClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ApolloClient;
use crate::domain::ApiKey;
use crate::error::{ApolloApiError, ApolloApiResult};
use crate::models::UpstreamPayload;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async trait for Apollo API operations.
///
/// Each method issues exactly one HTTP request.
#[async_trait]
pub trait AsyncApolloClient: Send + Sync {
    async fn search_people(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value>;

    async fn enrich_organization(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value>;
}

/// Async wrapper around synchronous ApolloClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncApolloClientImpl {
    client: Arc<ApolloClient>,
}

impl AsyncApolloClientImpl {
    pub fn new(client: ApolloClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ApolloClient {
        &self.client
    }
}

fn join_error(e: tokio::task::JoinError) -> ApolloApiError {
    ApolloApiError::Transport(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncApolloClient for AsyncApolloClientImpl {
    async fn search_people(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        let client = self.client.clone();
        let api_key = api_key.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.search_people(&api_key, &payload))
            .await
            .map_err(join_error)?
    }

    async fn enrich_organization(
        &self,
        api_key: &ApiKey,
        payload: &UpstreamPayload,
    ) -> ApolloApiResult<Value> {
        let client = self.client.clone();
        let api_key = api_key.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.enrich_organization(&api_key, &payload))
            .await
            .map_err(join_error)?
    }
}

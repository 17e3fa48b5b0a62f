//! Load balancer backend API

use super::{Mode, PagedResponse, ResourceRef, SEARCH_PARAM};
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{Page, Pageable};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const PATH: &str = "/api/lbaas/v1/backends.json";

/// Identifier and name of a backend as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend identifier
    pub identifier: String,
    /// Backend name
    pub name: String,
}

/// A load balancer backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    /// Backend identifier
    pub identifier: String,
    /// Backend name
    pub name: String,
    /// Balancing mode
    pub mode: Mode,
    /// Health check expression, if configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<String>,
    /// Load balancer this backend belongs to
    pub load_balancer: ResourceRef,
}

/// Definition used to create or update a backend
#[derive(Debug, Clone, Serialize)]
pub struct BackendRequest {
    /// Backend name
    pub name: String,
    /// Identifier of the load balancer to attach to
    pub load_balancer: String,
    /// Balancing mode
    pub mode: Mode,
    /// Health check expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<String>,
}

/// API bound to the backend resource family
#[derive(Debug, Clone)]
pub struct BackendApi {
    client: Client,
    search: Option<String>,
}

impl BackendApi {
    /// Create a backend API from a client
    pub fn new(client: Client) -> Self {
        Self {
            client,
            search: None,
        }
    }

    /// Restrict paged listings to entries matching the given search term
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Get a single backend by identifier
    pub async fn get(&self, identifier: &str) -> Result<Backend> {
        self.client.get_json(&format!("{PATH}/{identifier}")).await
    }

    /// Create a new backend
    pub async fn create(&self, definition: &BackendRequest) -> Result<Backend> {
        self.client.post_json(PATH, definition).await
    }

    /// Update an existing backend
    pub async fn update(&self, identifier: &str, definition: &BackendRequest) -> Result<Backend> {
        self.client
            .put_json(&format!("{PATH}/{identifier}"), definition)
            .await
    }

    /// Delete a backend
    pub async fn delete(&self, identifier: &str) -> Result<()> {
        self.client.delete(&format!("{PATH}/{identifier}")).await
    }
}

#[async_trait]
impl Pageable for BackendApi {
    type Item = BackendInfo;

    async fn get_page(&self, page: u32, limit: u32) -> Result<Page<BackendInfo>> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(ref term) = self.search {
            query.push((SEARCH_PARAM, term.clone()));
        }

        let response: PagedResponse<BackendInfo> =
            self.client.get_json_with_query(PATH, &query).await?;
        Ok(response.data)
    }
}

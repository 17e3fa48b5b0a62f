//! Load balancer server API

use super::{PagedResponse, ResourceRef, SEARCH_PARAM};
use crate::client::Client;
use crate::error::Result;
use crate::pagination::{Page, Pageable};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const PATH: &str = "/api/lbaas/v1/servers.json";

/// Identifier and name of a server as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server identifier
    pub identifier: String,
    /// Server name
    pub name: String,
}

/// A backend server a load balancer forwards traffic to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server identifier
    pub identifier: String,
    /// Server name
    pub name: String,
    /// Target IP address
    pub ip: String,
    /// Target port
    pub port: u16,
    /// Health check expression, if configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    /// Backend this server belongs to
    pub backend: ResourceRef,
}

/// Definition used to create or update a server
#[derive(Debug, Clone, Serialize)]
pub struct ServerRequest {
    /// Server name
    pub name: String,
    /// Target IP address
    pub ip: String,
    /// Target port
    pub port: u16,
    /// Identifier of the backend to attach to
    pub backend: String,
    /// Health check expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
}

/// API bound to the server resource family
#[derive(Debug, Clone)]
pub struct ServerApi {
    client: Client,
    search: Option<String>,
}

impl ServerApi {
    /// Create a server API from a client
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

    /// Get a single server by identifier
    pub async fn get(&self, identifier: &str) -> Result<Server> {
        self.client.get_json(&format!("{PATH}/{identifier}")).await
    }

    /// Create a new server
    pub async fn create(&self, definition: &ServerRequest) -> Result<Server> {
        self.client.post_json(PATH, definition).await
    }

    /// Update an existing server
    pub async fn update(&self, identifier: &str, definition: &ServerRequest) -> Result<Server> {
        self.client
            .put_json(&format!("{PATH}/{identifier}"), definition)
            .await
    }

    /// Delete a server
    pub async fn delete(&self, identifier: &str) -> Result<()> {
        self.client.delete(&format!("{PATH}/{identifier}")).await
    }
}

#[async_trait]
impl Pageable for ServerApi {
    type Item = ServerInfo;

    async fn get_page(&self, page: u32, limit: u32) -> Result<Page<ServerInfo>> {
        let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if let Some(ref term) = self.search {
            query.push((SEARCH_PARAM, term.clone()));
        }

        let response: PagedResponse<ServerInfo> =
            self.client.get_json_with_query(PATH, &query).await?;
        Ok(response.data)
    }
}

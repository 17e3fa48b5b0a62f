//! Load balancer (LBaaS) resource families
//!
//! Typed operations for load balancer backends and servers: paged listings
//! through the [`pagination`](crate::pagination) engine plus thin CRUD
//! wrappers.

mod backend;
mod server;

pub use backend::{Backend, BackendApi, BackendInfo, BackendRequest};
pub use server::{Server, ServerApi, ServerInfo, ServerRequest};

use crate::pagination::Page;
use serde::{Deserialize, Serialize};

/// Balancing mode of a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Layer-4 TCP balancing
    #[default]
    Tcp,
    /// Layer-7 HTTP balancing
    Http,
}

/// Reference to a related resource embedded in a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    /// Identifier of the referenced resource
    pub identifier: String,
    /// Display name of the referenced resource
    #[serde(default)]
    pub name: String,
}

/// Query parameter name for the listing search filter
pub(crate) const SEARCH_PARAM: &str = "search";

/// Outer envelope wrapping every paged listing response
#[derive(Debug, Deserialize)]
pub(crate) struct PagedResponse<T> {
    pub data: Page<T>,
}

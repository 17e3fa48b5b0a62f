//! CloudDNS zone record API

use crate::client::Client;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const PATH_PREFIX: &str = "/api/clouddns/v1/zones";

/// A DNS record inside a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier
    pub identifier: Uuid,
    /// Record name, relative to the zone
    pub name: String,
    /// Record type (A, AAAA, CNAME, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data
    pub rdata: String,
    /// Region the record is served from
    #[serde(default)]
    pub region: String,
    /// Time to live in seconds
    #[serde(default)]
    pub ttl: u32,
    /// Whether this record is managed by the Engine and cannot be changed
    #[serde(default)]
    pub immutable: bool,
}

/// Definition used to create or update a record
#[derive(Debug, Clone, Serialize)]
pub struct RecordRequest {
    /// Record name, relative to the zone
    pub name: String,
    /// Record type (A, AAAA, CNAME, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data
    pub rdata: String,
    /// Region the record is served from
    pub region: String,
    /// Time to live in seconds; omitted to inherit the zone default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// A DNS zone, as returned by record mutations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Zone {
    /// Zone name
    pub name: String,
    /// Administrative contact
    #[serde(default)]
    pub admin_email: String,
    /// Whether the Engine is authoritative for this zone
    #[serde(default)]
    pub is_master: bool,
    /// SOA refresh interval in seconds
    #[serde(default)]
    pub refresh: u32,
    /// SOA retry interval in seconds
    #[serde(default)]
    pub retry: u32,
    /// SOA expire interval in seconds
    #[serde(default)]
    pub expire: u32,
    /// Default record time to live in seconds
    #[serde(default)]
    pub ttl: u32,
}

/// API bound to zone records
#[derive(Debug, Clone)]
pub struct ZoneApi {
    client: Client,
}

impl ZoneApi {
    /// Create a zone API from a client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all records of a zone
    ///
    /// Record listings are not paginated; the API returns the full set.
    pub async fn list_records(&self, zone: &str) -> Result<Vec<Record>> {
        self.client
            .get_json(&format!("{PATH_PREFIX}/{zone}/records"))
            .await
    }

    /// Create a new record in a zone, returning the updated zone
    pub async fn create_record(&self, zone: &str, record: &RecordRequest) -> Result<Zone> {
        self.client
            .post_json(&format!("{PATH_PREFIX}/{zone}/records"), record)
            .await
    }

    /// Update an existing record, returning the updated zone
    pub async fn update_record(&self, zone: &str, id: Uuid, record: &RecordRequest) -> Result<Zone> {
        self.client
            .put_json(&format!("{PATH_PREFIX}/{zone}/records/{id}"), record)
            .await
    }

    /// Delete a record from a zone
    pub async fn delete_record(&self, zone: &str, id: Uuid) -> Result<()> {
        self.client
            .delete(&format!("{PATH_PREFIX}/{zone}/records/{id}"))
            .await
    }
}

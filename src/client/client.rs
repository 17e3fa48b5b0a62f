//! Core client for the Cirrus Engine API
//!
//! Every request is signed with the configured API token, logged at debug
//! level with the token redacted, and checked against the Engine's error
//! conventions before the body is handed back to the caller:
//!
//! - connection/transport failures surface as [`Error::Transport`]
//! - 5xx responses surface as [`Error::Server`]
//! - any other non-2xx response is decoded into the structured
//!   [`ApiError`](crate::error::ApiError) envelope and surfaced as
//!   [`Error::Api`]

use crate::error::{ApiErrorEnvelope, Error, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Name of the environment variable holding the API token
pub const TOKEN_ENV: &str = "CIRRUS_TOKEN";

/// Default base URL used for requests
pub const DEFAULT_BASE_URL: &str = "https://engine.cirrus.cloud";

/// Suggested timeout for API calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Engine client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    token: String,
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("default_headers", &self.default_headers)
            .field("token", &"REDACTED")
            .finish()
    }
}

/// Builder for the client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_headers: HashMap<String, String>,
    token: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Use the given API token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read the API token from the `CIRRUS_TOKEN` environment variable
    pub fn token_from_env(mut self) -> Result<Self> {
        match std::env::var(TOKEN_ENV) {
            Ok(token) => {
                self.token = Some(token);
                Ok(self)
            }
            Err(_) => Err(Error::env_missing(TOKEN_ENV)),
        }
    }

    /// Build the config
    ///
    /// Fails if no authentication token has been provided.
    pub fn build(self) -> Result<ClientConfig> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config("token not set"))?;

        Ok(ClientConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("cirrus-client/{}", env!("CARGO_PKG_VERSION"))),
            default_headers: self.default_headers,
            token,
        })
    }
}

/// Client for the Cirrus Engine API
///
/// Cheap to clone; all clones share the same connection pool and config.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Create a new client from a config
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Create a client authenticated from the environment
    ///
    /// Reads the API token from `CIRRUS_TOKEN` and uses defaults for
    /// everything else.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::builder().token_from_env()?.build()?)
    }

    /// Base URL this client sends requests to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Make a GET request and decode the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json_with_query(path, &[]).await
    }

    /// Make a GET request with query parameters and decode the JSON response
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path, query, None).await?;
        decode_json(response).await
    }

    /// Make a POST request with a JSON body and decode the JSON response
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = encode_body(body)?;
        let response = self.request(Method::POST, path, &[], Some(body)).await?;
        decode_json(response).await
    }

    /// Make a PUT request with a JSON body and decode the JSON response
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = encode_body(body)?;
        let response = self.request(Method::PUT, path, &[], Some(body)).await?;
        decode_json(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Fire a request against the API and map the response status
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Response> {
        let url = self.build_url(path)?;

        let mut req = self.http.request(method.clone(), url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(ref body) = body {
            req = req.json(body);
        }
        req = req.header(AUTHORIZATION, format!("Token {}", self.config.token));

        debug!(%method, path, authorization = "REDACTED", "sending engine request");

        let response = req.send().await?;
        let status = response.status();

        debug!(status = status.as_u16(), path, "received engine response");

        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::server(status.as_u16(), body));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let envelope: ApiErrorEnvelope = serde_json::from_str(&body)
                .map_err(|e| Error::decode(format!("could not decode error response: {e}")))?;
            return Err(Error::Api(envelope.error));
        }

        Ok(response)
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.config.base_url)?;
        Ok(base.join(path)?)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| Error::decode(format!("could not encode request body: {e}")))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| Error::decode(e.to_string()))
}

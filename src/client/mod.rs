//! HTTP client module
//!
//! Provides the transport collaborator every resource family goes through.
//!
//! # Features
//!
//! - **Token Authentication**: `Authorization: Token ...` on every request
//! - **Error Mapping**: 5xx → server error, other non-2xx → structured API error
//! - **Request Logging**: debug-level request/response logging with the token redacted
//! - **Environment Config**: token loading from `CIRRUS_TOKEN`

mod client;

pub use client::{
    Client, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TOKEN_ENV,
};

#[cfg(test)]
mod tests;

//! # cirrus-client
//!
//! Rust client for the Cirrus Engine cloud infrastructure API.
//!
//! ## Features
//!
//! - **Typed Resource Operations**: load balancer backends and servers,
//!   DNS zone records
//! - **Generic Pagination**: one engine for every paged listing — a bounded
//!   predicate scan and an unbounded cancellable element stream
//! - **Token Authentication**: API token from config or the `CIRRUS_TOKEN`
//!   environment variable
//! - **Structured Errors**: transport, server and API errors kept apart
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cirrus_client::{Client, Result};
//! use cirrus_client::lbaas::BackendApi;
//! use cirrus_client::pagination::{scan_until, stream, StreamEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Token read from CIRRUS_TOKEN
//!     let client = Client::from_env()?;
//!     let backends = BackendApi::new(client);
//!
//!     // Scan the first listing page for a backend by name
//!     scan_until(&backends, |info| Ok(info.name == "web-1")).await?;
//!
//!     // Or walk the whole collection
//!     let (mut rx, cancel) = stream(backends);
//!     while let Some(event) = rx.recv().await {
//!         match event {
//!             StreamEvent::Item(info) => println!("{}", info.name),
//!             StreamEvent::Failed(err) => eprintln!("listing ended: {err}"),
//!         }
//!     }
//!     drop(cancel);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// HTTP transport collaborator
pub mod client;

/// Generic pagination engine
pub mod pagination;

/// Load balancer resource families
pub mod lbaas;

/// CloudDNS resource family
pub mod dns;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, ClientConfig};
pub use error::{ApiError, Error, Result};
pub use pagination::{scan_until, stream, CancelHandle, Page, Pageable, StreamEvent};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

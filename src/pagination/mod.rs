//! Pagination module
//!
//! Turns a family of "fetch page N of size S" endpoints into two consumption
//! modes: a bounded predicate-driven scan and an unbounded cancellable
//! element stream.
//!
//! # Overview
//!
//! A resource family participates by implementing [`Pageable`] for its
//! listing endpoint. The engine never inspects page content beyond iterating
//! it; elements are delivered in strict page order, content order within a
//! page, and never more than one fetch is in flight at a time.

mod iter;
mod types;

pub use iter::{
    scan_until, scan_until_with_limit, stream, stream_with_limit, CancelHandle, StreamEvent,
};
pub use types::{Page, Pageable, DEFAULT_PAGE_SIZE};

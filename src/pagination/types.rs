//! Pagination types and the page-fetch contract
//!
//! Defines the core abstractions every paged resource family implements.

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Page size used when the caller does not choose one explicitly.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One fetched slice of a paginated listing.
///
/// A new `Page` value is produced by every fetch. `total_pages` and
/// `total_items` reflect what the API reported at fetch time; there is no
/// consistency guarantee across pages if the collection mutates between
/// fetches.
///
/// The serde field names match the Engine's paged listing payload:
/// `{ "page": 1, "limit": 10, "total_pages": 3, "total_items": 25, "data": [...] }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "page")]
    number: u32,
    #[serde(rename = "limit")]
    size: u32,
    total_pages: u32,
    total_items: u32,
    #[serde(rename = "data")]
    content: Vec<T>,
}

impl<T> Page<T> {
    /// Create a page value
    ///
    /// Page numbers are 1-based.
    pub fn new(
        number: u32,
        size: u32,
        total_pages: u32,
        total_items: u32,
        content: Vec<T>,
    ) -> Self {
        debug_assert!(number >= 1, "page numbers are 1-based");
        Self {
            number,
            size,
            total_pages,
            total_items,
            content,
        }
    }

    /// 1-based index of this page within the full result set
    pub fn num(&self) -> u32 {
        self.number
    }

    /// Page size (limit) used to fetch this page
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of pages in the full result set, as reported at fetch time
    pub fn total(&self) -> u32 {
        self.total_pages
    }

    /// Total number of elements across all pages, as reported at fetch time
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Elements of this page, in result-set order
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Whether there are more pages to fetch after this one
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Consume the page, returning its content
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Move the content out of the page, leaving it empty
    pub(crate) fn take_content(&mut self) -> Vec<T> {
        std::mem::take(&mut self.content)
    }
}

/// The capability contract a paged resource family implements.
///
/// `get_page` performs exactly one network round trip; transport failures,
/// 5xx responses and unparsable payloads surface as the corresponding error
/// kinds. No retries happen at this level.
#[async_trait]
pub trait Pageable: Send + Sync {
    /// Element type of this resource family's listings
    type Item: Send + Sync + 'static;

    /// Fetch an explicit (page, limit) pair
    async fn get_page(&self, page: u32, limit: u32) -> Result<Page<Self::Item>>;

    /// Fetch the page following `current`
    ///
    /// Calling this repeatedly with the page returned from the previous call
    /// walks the collection page by page.
    async fn next_page(&self, current: &Page<Self::Item>) -> Result<Page<Self::Item>> {
        self.get_page(current.num() + 1, current.size()).await
    }
}

#[async_trait]
impl<P> Pageable for Arc<P>
where
    P: Pageable + ?Sized,
{
    type Item = P::Item;

    async fn get_page(&self, page: u32, limit: u32) -> Result<Page<Self::Item>> {
        (**self).get_page(page, limit).await
    }

    async fn next_page(&self, current: &Page<Self::Item>) -> Result<Page<Self::Item>> {
        (**self).next_page(current).await
    }
}

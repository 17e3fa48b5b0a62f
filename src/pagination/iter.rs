//! Consumption modes for paged listings
//!
//! Two ways to drive a [`Pageable`]:
//!
//! - [`scan_until`]: fetch page 1 and apply a predicate to each element,
//!   stopping at the first match.
//! - [`stream`]: fetch every page in a background task and push each element
//!   into a channel until the collection is exhausted or the consumer
//!   cancels.

use super::types::{Pageable, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use tokio::sync::{mpsc, watch};
use tracing::warn;

/// Scan the first page of a listing until the predicate matches.
///
/// Fetches page 1 at the default page size and invokes `predicate` on each
/// element in order. Returns `Ok(())` on the first element for which the
/// predicate returns `Ok(true)`, without fetching any further page. If the
/// predicate returns an error, that error is propagated immediately.
///
/// Only the first page is evaluated: if no element of page 1 matches, the
/// result is [`Error::ConditionNeverMet`] even when later pages exist.
/// Existing consumers rely on this behavior; use [`stream`] to walk the
/// whole collection.
pub async fn scan_until<P, F>(pageable: &P, predicate: F) -> Result<()>
where
    P: Pageable,
    F: FnMut(&P::Item) -> Result<bool>,
{
    scan_until_with_limit(pageable, DEFAULT_PAGE_SIZE, predicate).await
}

/// [`scan_until`] with an explicit page size.
pub async fn scan_until_with_limit<P, F>(pageable: &P, limit: u32, mut predicate: F) -> Result<()>
where
    P: Pageable,
    F: FnMut(&P::Item) -> Result<bool>,
{
    let page = pageable.get_page(1, limit).await?;

    for item in page.content() {
        if predicate(item)? {
            return Ok(());
        }
    }

    Err(Error::ConditionNeverMet)
}

/// An element or terminal failure delivered by [`stream`].
///
/// A fetch failure ends the stream: the `Failed` event is the last one sent
/// before the channel closes.
#[derive(Debug)]
pub enum StreamEvent<T> {
    /// The next element of the collection, in page and content order
    Item(T),
    /// The fetch error that ended the stream
    Failed(Error),
}

impl<T> StreamEvent<T> {
    /// Whether this event carries an element
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// The element, if this event carries one
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Failed(_) => None,
        }
    }
}

/// Cancellation handle for a [`stream`] task.
///
/// Cancellation is cooperative: the producer observes it at push points, so
/// a page fetch already in flight completes (or fails) first. Calling
/// [`cancel`](CancelHandle::cancel) any number of times is safe; dropping
/// the handle without calling it does not cancel the stream.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    signal: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal the producer task to stop and close the channel
    pub fn cancel(&self) {
        let _ = self.signal.send(true);
    }
}

/// Push every element of every page into a channel.
///
/// Spawns a single background task that fetches page 1 at the default page
/// size, sends each element in order, and advances with
/// [`next_page`](Pageable::next_page) until the last page is exhausted. The
/// channel has capacity 1, so the producer suspends on each push until the
/// consumer receives or cancellation fires.
///
/// The channel closes when the task ends: after the last element, after a
/// terminal [`StreamEvent::Failed`], after cancellation, or when the
/// consumer drops the receiver. No events are sent after closing.
pub fn stream<P>(pageable: P) -> (mpsc::Receiver<StreamEvent<P::Item>>, CancelHandle)
where
    P: Pageable + 'static,
{
    stream_with_limit(pageable, DEFAULT_PAGE_SIZE)
}

/// [`stream`] with an explicit page size.
pub fn stream_with_limit<P>(
    pageable: P,
    limit: u32,
) -> (mpsc::Receiver<StreamEvent<P::Item>>, CancelHandle)
where
    P: Pageable + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    let (cancel_tx, mut cancel_rx) = watch::channel(false);

    tokio::spawn(async move {
        let mut page = match pageable.get_page(1, limit).await {
            Ok(page) => page,
            Err(err) => {
                warn!(error = %err, "initial page fetch failed, ending stream");
                let _ = tx.send(StreamEvent::Failed(err)).await;
                return;
            }
        };

        loop {
            for item in page.take_content() {
                tokio::select! {
                    biased;
                    () = cancelled(&mut cancel_rx) => return,
                    sent = tx.send(StreamEvent::Item(item)) => {
                        if sent.is_err() {
                            // consumer dropped the receiver
                            return;
                        }
                    }
                }
            }

            if !page.has_next() {
                return;
            }

            page = match pageable.next_page(&page).await {
                Ok(next) => next,
                Err(err) => {
                    warn!(error = %err, page = page.num() + 1, "page fetch failed, ending stream");
                    let _ = tx.send(StreamEvent::Failed(err)).await;
                    return;
                }
            };
        }
    });

    (rx, CancelHandle { signal: cancel_tx })
}

/// Resolve once cancellation has been signalled.
///
/// Never resolves if the handle was dropped without cancelling.
async fn cancelled(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

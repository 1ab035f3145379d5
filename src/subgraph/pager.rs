//! Cursor-driven pagination over a pool source

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use crate::{
    subgraph::{client::PoolSource, query::PAGE_SIZE},
    types::Pool,
};

/// Walks a [`PoolSource`] page by page, advancing the cursor to the last
/// creation timestamp of each full page.
///
/// Pagination is strictly-greater-than on the timestamp. If more pools share
/// the boundary timestamp than fit in the rest of a page, the remainder is
/// skipped; a full page with a single timestamp is logged as a warning.
pub struct PoolPager<'a, S: PoolSource + ?Sized> {
    source: &'a S,
    cursor: u64,
    pages_fetched: usize,
    finished: bool,
}

impl<'a, S: PoolSource + ?Sized> PoolPager<'a, S> {
    pub fn new(source: &'a S, start_cursor: u64) -> Self {
        Self {
            source,
            cursor: start_cursor,
            pages_fetched: 0,
            finished: false,
        }
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fetches the next page, or `None` once a short page has been seen.
    pub async fn next_page(&mut self) -> anyhow::Result<Option<Vec<Pool>>> {
        if self.finished {
            return Ok(None);
        }

        let page = match self.source.fetch_pools(self.cursor).await {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        debug!(
            page = self.pages_fetched,
            cursor = self.cursor,
            cursor_time = ?cursor_time(self.cursor),
            pools = page.len(),
            "Fetched pool page"
        );

        match (page.first(), page.last()) {
            (Some(first), Some(last)) if page.len() >= PAGE_SIZE => {
                if first.created_at_timestamp == last.created_at_timestamp {
                    warn!(
                        "⚠️ Full page of {} pools shares timestamp {}; pools beyond this page with the same timestamp will be skipped",
                        page.len(),
                        last.created_at_timestamp
                    );
                }

                if last.created_at_timestamp <= self.cursor {
                    warn!(
                        "⚠️ Cursor did not advance past {} (last pool at {}); stopping pagination",
                        self.cursor, last.created_at_timestamp
                    );
                    self.finished = true;
                } else {
                    self.cursor = last.created_at_timestamp;
                }
            }
            _ => {
                self.finished = true;
            }
        }

        Ok(Some(page))
    }
}

fn cursor_time(cursor: u64) -> Option<DateTime<Utc>> {
    i64::try_from(cursor)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Collects every pool created after `start_cursor`, in ascending creation
/// order. Any page failure aborts the whole fetch.
pub async fn fetch_all_pools<S: PoolSource + ?Sized>(
    source: &S,
    start_cursor: u64,
) -> anyhow::Result<Vec<Pool>> {
    let mut pager = PoolPager::new(source, start_cursor);
    let mut pools = Vec::new();

    while let Some(page) = pager.next_page().await? {
        pools.extend(page);
    }

    info!(
        "✅ Fetched {} pools across {} pages",
        pools.len(),
        pager.pages_fetched()
    );
    Ok(pools)
}

//! Typed pagination cursor.
//!
//! List responses carry full URLs in their `next`/`previous` fields; the
//! cursor is the `page` query parameter of that URL. It is extracted once
//! here, at the data boundary, so the query layer never re-parses URLs.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// One-based page number used as the list cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageCursor(u32);

impl PageCursor {
    /// The first page of any listing.
    pub const FIRST: PageCursor = PageCursor(1);

    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    pub fn page(&self) -> u32 {
        self.0
    }

    /// The cursor immediately after this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Extract the cursor from a `next` URL. `None` when the URL does not
    /// parse or carries no usable `page` parameter.
    pub fn from_next_url(next: &str) -> Option<Self> {
        let url = Url::parse(next).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<u32>().ok())
            .map(PageCursor::new)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}

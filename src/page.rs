/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::panorama::Panorama;
use crate::properties::Link;
use serde::Deserialize;
use std::collections::HashMap;

/// One page of a paginated list response.
///
/// Each page is an independent snapshot; navigating to an adjacent page
/// fetches a fresh one and never mutates this one. An absent href on
/// [`PageLinks::previous`]/[`PageLinks::next`] is the sole signal that the
/// page sits at a boundary of the result set.
#[derive(Deserialize, Debug, Clone)]
pub struct PagedPanoramas {
    #[serde(rename = "_links")]
    pub links: PageLinks,

    /// Total number of records matching the query, across all pages.
    pub count: u64,

    // Collection name to record list; "panoramas" is the only key the API
    // is known to emit.
    #[serde(rename = "_embedded")]
    embedded: HashMap<String, Vec<Option<Panorama>>>,
}

impl PagedPanoramas {
    /// The records on this page. An entry is `None` when the API could not
    /// materialize a record at that position.
    pub fn panoramas(&self) -> &[Option<Panorama>] {
        self.embedded.get("panoramas").map_or(&[], Vec::as_slice)
    }

    /// Consumes the page and returns its record list.
    pub fn into_panoramas(mut self) -> Vec<Option<Panorama>> {
        self.embedded.remove("panoramas").unwrap_or_default()
    }

    pub fn has_next_page(&self) -> bool {
        self.links.next.href.is_some()
    }

    pub fn has_previous_page(&self) -> bool {
        self.links.previous.href.is_some()
    }
}

/// Navigation links attached to a [`PagedPanoramas`] response.
#[derive(Deserialize, Debug, Clone)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_link: Link,

    pub previous: Link,

    pub next: Link,
}

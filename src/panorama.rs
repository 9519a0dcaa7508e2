/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::client::Client;
use crate::errors::PanoramaError;
use crate::properties::{ImageSize, Link};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::hash::{Hash, Hasher};

/// Holds information returned for a single panorama record.
///
/// See the [Panorama API Docs](https://api.data.amsterdam.nl/api/) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct Panorama {
    #[serde(rename = "_links")]
    pub links: PanoramaLinks,

    pub cubic_img_baseurl: String,

    pub cubic_img_pattern: String,

    pub geometry: PointGeometry,

    #[serde(rename = "pano_id")]
    pub id: String,

    /// Moment the image was captured.
    pub timestamp: DateTime<Utc>,

    /// File name the API publishes the image under; also the name
    /// downloads are written to.
    pub filename: String,

    pub surface_type: String,

    pub mission_distance: u32,

    pub mission_type: String,

    pub mission_year: String,

    pub roll: f64,

    pub pitch: f64,

    pub heading: f64,

    /// Ordered tag list; the API may leave individual entries null.
    pub tags: Vec<Option<String>>,
}

impl Panorama {
    /// Returns the record at the provided full url
    pub async fn from_url(client: &Client, url: &str) -> Result<Self, PanoramaError> {
        client.get::<Self>(url).await
    }

    /// Returns the record for the specified panorama id
    pub async fn from_id(client: &Client, id: &str) -> Result<Self, PanoramaError> {
        client.get_panorama(id).await
    }
}

impl PartialEq for Panorama {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Panorama {}

impl Hash for Panorama {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        state.write(self.id.as_bytes());
        let _ = state.finish();
    }
}

impl std::fmt::Display for Panorama {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "filename: {}, id: {}", self.filename, self.id)
    }
}

/// Navigation links attached to a [`Panorama`] record.
#[derive(Deserialize, Debug, Clone)]
pub struct PanoramaLinks {
    #[serde(rename = "self")]
    pub self_link: Link,

    pub equirectangular_full: Link,

    pub equirectangular_medium: Link,

    pub equirectangular_small: Link,

    pub cubic_img_preview: Link,

    pub thumbnail: Link,

    pub adjacencies: Link,
}

impl PanoramaLinks {
    /// Returns the equirectangular image link for the requested size.
    pub fn equirectangular(&self, size: ImageSize) -> &Link {
        match size {
            ImageSize::Small => &self.equirectangular_small,
            ImageSize::Medium => &self.equirectangular_medium,
            ImageSize::Full => &self.equirectangular_full,
        }
    }
}

/// Point geometry of a record, as published by the API.
///
/// Coordinates are longitude-first (x, y), matching the `near` query
/// parameter ordering.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,

    pub coordinates: Vec<f64>,
}

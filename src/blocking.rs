/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Blocking twin of [`crate::Client`] with identical semantics, for callers
//! without an async runtime. Page walks are a `next_page` loop here; the
//! record stream is async-only.

use crate::client::{DEFAULT_BASE_URL, normalize_base_url};
use crate::errors::PanoramaError;
use crate::page::PagedPanoramas;
use crate::panorama::Panorama;
use crate::properties::ImageSize;
use crate::query::ListFilters;
use bytes::Bytes;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use url::Url;

/// Blocking client for the panorama API.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    https_client: reqwest::blocking::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self {
            base_url: normalize_base_url(DEFAULT_BASE_URL).expect("default base URL is valid"),
            https_client: reqwest::blocking::Client::new(),
        }
    }

    /// Creates a client against the provided API root instead of the
    /// default one.
    pub fn with_base_url(base_url: &str) -> Result<Self, PanoramaError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            https_client: reqwest::blocking::Client::new(),
        })
    }

    /// Returns the record for the specified panorama id
    pub fn get_panorama(&self, panorama_id: &str) -> Result<Panorama, PanoramaError> {
        let req_url = self.base_url.join(panorama_id)?;
        self.get(req_url.as_str())
    }

    /// Lists records matching the provided filters.
    pub fn list_panoramas(&self, filters: &ListFilters) -> Result<PagedPanoramas, PanoramaError> {
        let req_url = self.base_url.join(&filters.to_query_string())?;
        self.get(req_url.as_str())
    }

    /// Fetches the page after the provided one.
    pub fn next_page(&self, page: &PagedPanoramas) -> Result<PagedPanoramas, PanoramaError> {
        let href = page
            .links
            .next
            .href
            .as_ref()
            .ok_or(PanoramaError::NoNextPage())?;
        self.get(href.as_str())
    }

    /// Fetches the page before the provided one.
    pub fn previous_page(&self, page: &PagedPanoramas) -> Result<PagedPanoramas, PanoramaError> {
        let href = page
            .links
            .previous
            .href
            .as_ref()
            .ok_or(PanoramaError::NoPreviousPage())?;
        self.get(href.as_str())
    }

    /// Fetches the equirectangular image of the requested size as raw bytes.
    pub fn fetch_image(
        &self,
        panorama: &Panorama,
        size: ImageSize,
    ) -> Result<Bytes, PanoramaError> {
        let href = panorama
            .links
            .equirectangular(size)
            .href
            .as_ref()
            .ok_or_else(|| PanoramaError::ImageLinkNotFound(size, panorama.id.clone()))?;
        self.get_bytes(href.as_str())
    }

    /// Downloads the equirectangular image of the requested size into
    /// `output_dir`, named by the record's filename, overwriting any
    /// existing file of that name. Returns the written path.
    pub fn download_image(
        &self,
        panorama: &Panorama,
        size: ImageSize,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, PanoramaError> {
        let data = self.fetch_image(panorama, size)?;
        let path = output_dir.as_ref().join(&panorama.filename);
        debug!("writing {} bytes to {}", data.len(), path.display());
        std::fs::write(&path, &data)?;
        Ok(path)
    }

    /// Performs a get request against the API and deserializes the JSON
    /// response.
    pub fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, PanoramaError> {
        let req_url = Url::parse(url)?;
        debug!("GET {req_url}");
        let resp = self
            .https_client
            .get(req_url)
            .header("Accept", "application/json")
            .send()?;
        let resp = error_for_status(resp)?;
        Ok(serde_json::from_str(&resp.text()?)?)
    }

    /// Performs a get request for a raw payload (images).
    pub fn get_bytes(&self, url: &str) -> Result<Bytes, PanoramaError> {
        let req_url = Url::parse(url)?;
        debug!("GET {req_url}");
        let resp = self.https_client.get(req_url).send()?;
        let resp = error_for_status(resp)?;
        Ok(resp.bytes()?)
    }
}

fn error_for_status(
    resp: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, PanoramaError> {
    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        let url = resp.url().to_string();
        let body = resp.text().unwrap_or_default();
        return Err(PanoramaError::Status { url, status, body });
    }
    Ok(resp)
}

/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::errors::PanoramaError;
use crate::page::PagedPanoramas;
use crate::panorama::Panorama;
use crate::properties::ImageSize;
use crate::query::ListFilters;
use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;
use log::debug;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use url::Url;

/// Root of the City of Amsterdam panorama API
pub const DEFAULT_BASE_URL: &str = "https://api.data.amsterdam.nl/panorama/panoramas";

/// Async client for the panorama API.
///
/// Holds nothing but the base URL and a reqwest connection pool; it is cheap
/// to clone and safe to share across tasks. A blocking twin with the same
/// operations lives in [`crate::blocking`].
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    https_client: reqwest::Client,
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
            https_client: reqwest::Client::new(),
        }
    }

    /// Creates a client against the provided API root instead of the
    /// default one.
    pub fn with_base_url(base_url: &str) -> Result<Self, PanoramaError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            https_client: reqwest::Client::new(),
        })
    }

    /// Returns the record for the specified panorama id
    pub async fn get_panorama(&self, panorama_id: &str) -> Result<Panorama, PanoramaError> {
        let req_url = self.base_url.join(panorama_id)?;
        self.get(req_url.as_str()).await
    }

    /// Lists records matching the provided filters.
    pub async fn list_panoramas(
        &self,
        filters: &ListFilters,
    ) -> Result<PagedPanoramas, PanoramaError> {
        let req_url = self.base_url.join(&filters.to_query_string())?;
        self.get(req_url.as_str()).await
    }

    /// Fetches the page after the provided one.
    ///
    /// Fails with [`PanoramaError::NoNextPage`] before touching the network
    /// when the page is the last of its result set.
    pub async fn next_page(&self, page: &PagedPanoramas) -> Result<PagedPanoramas, PanoramaError> {
        let href = page
            .links
            .next
            .href
            .as_ref()
            .ok_or(PanoramaError::NoNextPage())?;
        self.get(href.as_str()).await
    }

    /// Fetches the page before the provided one.
    ///
    /// Fails with [`PanoramaError::NoPreviousPage`] before touching the
    /// network when the page is the first of its result set.
    pub async fn previous_page(
        &self,
        page: &PagedPanoramas,
    ) -> Result<PagedPanoramas, PanoramaError> {
        let href = page
            .links
            .previous
            .href
            .as_ref()
            .ok_or(PanoramaError::NoPreviousPage())?;
        self.get(href.as_str()).await
    }

    /// Fetches the equirectangular image of the requested size as raw bytes.
    pub async fn fetch_image(
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
        self.get_bytes(href.as_str()).await
    }

    /// Downloads the equirectangular image of the requested size into
    /// `output_dir`, named by the record's filename, overwriting any
    /// existing file of that name. Returns the written path.
    pub async fn download_image(
        &self,
        panorama: &Panorama,
        size: ImageSize,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, PanoramaError> {
        let data = self.fetch_image(panorama, size).await?;
        let path = output_dir.as_ref().join(&panorama.filename);
        debug!("writing {} bytes to {}", data.len(), path.display());
        std::fs::write(&path, &data)?;
        Ok(path)
    }

    /// Streams every record matching the filters, following next links
    /// across page boundaries. Record entries the API could not materialize
    /// are skipped.
    pub fn stream_panoramas(
        &self,
        filters: ListFilters,
    ) -> impl Stream<Item = Result<Panorama, PanoramaError>> + '_ {
        try_stream! {
            let mut page = self.list_panoramas(&filters).await?;
            loop {
                let next_href = page.links.next.href.clone();
                for panorama in page.into_panoramas().into_iter().flatten() {
                    yield panorama;
                }
                match next_href {
                    Some(href) => page = self.get(href.as_str()).await?,
                    None => break,
                }
            }
        }
    }

    /// Performs a get request against the API and deserializes the JSON
    /// response. Usable directly for API-supplied links (adjacencies,
    /// thumbnails) that have no dedicated operation.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, PanoramaError> {
        let req_url = Url::parse(url)?;
        debug!("GET {req_url}");
        let resp = self
            .https_client
            .get(req_url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let resp = error_for_status(resp).await?;
        Ok(serde_json::from_str(&resp.text().await?)?)
    }

    /// Performs a get request for a raw payload (images).
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes, PanoramaError> {
        let req_url = Url::parse(url)?;
        debug!("GET {req_url}");
        let resp = self.https_client.get(req_url).send().await?;
        let resp = error_for_status(resp).await?;
        Ok(resp.bytes().await?)
    }
}

// The API root is joined against both record ids and query strings, which
// requires a trailing slash on its path.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<Url, PanoramaError> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

// Turns client/server error statuses into PanoramaError::Status, keeping
// the raw body for the caller.
async fn error_for_status(resp: reqwest::Response) -> Result<reqwest::Response, PanoramaError> {
    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();
        return Err(PanoramaError::Status { url, status, body });
    }
    Ok(resp)
}

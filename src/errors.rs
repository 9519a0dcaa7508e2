/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::properties::ImageSize;
use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum PanoramaError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    /// The API answered with a client or server error status. The raw
    /// response body is kept so callers can inspect the API's own error
    /// payload.
    #[error("API responded with HTTP {status} for {url}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("No next page available")]
    NoNextPage(),

    #[error("No previous page available")]
    NoPreviousPage(),

    #[error("Image link 'equirectangular_{0}' not available for panorama: {1}")]
    ImageLinkNotFound(ImageSize, String),
}

/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Panoramas
//!
//! This library is a typed client for the City of Amsterdam panorama API,
//! a paginated REST service publishing street-level panorama imagery and
//! its metadata.
//!
//! For further details on the Rest API refer to the [Amsterdam API Docs](https://api.data.amsterdam.nl/api/)
//!
//! ## Features
//!
//! - Fetch a single panorama record by id
//! - List and filter records by location (WGS84 or RD New), capture date
//!   and page size
//! - Navigate paginated results by following the API's next/previous links,
//!   or stream every matching record across pages
//! - Download the equirectangular image of a record at small/medium/full
//!   size
//! - Lower level `get`/`get_bytes` interface for API-supplied links
//!   (adjacencies, thumbnails, cubic previews)
//!
//! *The API is public and unauthenticated. Both an async [`Client`] and a
//! blocking [`blocking::Client`] are provided with identical semantics.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! panoramas = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use panoramas::{Client, ImageSize, ListFilters, LocationQuery, PanoramaError};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn download_nearby(latitude: f64, longitude: f64) -> Result<(), PanoramaError> {
//!     let client = Client::new();
//!
//!     // Records within 250 meters of the point, newest API defaults apply
//!     let filters = ListFilters {
//!         location: Some(LocationQuery {
//!             radius: 250,
//!             ..LocationQuery::new(latitude, longitude)
//!         }),
//!         ..ListFilters::default()
//!     };
//!
//!     let records = client.stream_panoramas(filters);
//!     pin_mut!(records);
//!     while let Some(panorama) = records.next().await.transpose()? {
//!         println!("Found panorama: {panorama}");
//!
//!         // Write the medium equirectangular image to the working directory
//!         client
//!             .download_image(&panorama, ImageSize::Medium, ".")
//!             .await?;
//!         break;
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod blocking;
pub mod client;
pub mod errors;
pub mod page;
pub mod panorama;
pub mod properties;
pub mod query;

pub use client::*;
pub use errors::*;
pub use page::*;
pub use panorama::*;
pub use properties::*;
pub use query::*;

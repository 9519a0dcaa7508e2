/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::properties::SpatialReference;
use chrono::NaiveDate;
use std::num::NonZeroU32;

/// A point-plus-radius location filter for list requests.
///
/// For [`SpatialReference::Wgs84`] the coordinates are degrees; for
/// [`SpatialReference::RdNew`] `longitude` carries the easting (x) and
/// `latitude` the northing (y), both in meters. The radius is meters in
/// either system.
///
/// No range validation is performed here; the remote API is the authority
/// on coordinate correctness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters surrounding the point.
    pub radius: u32,
    pub srid: SpatialReference,
}

impl LocationQuery {
    /// Creates a WGS84 location filter with the default 1 meter radius.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: 1,
            srid: SpatialReference::default(),
        }
    }
}

/// Optional filters for a list request.
///
/// ```
/// use panoramas::{ListFilters, LocationQuery};
/// use std::num::NonZeroU32;
///
/// let filters = ListFilters {
///     location: Some(LocationQuery::new(52.368, 4.9036)),
///     limit_results: NonZeroU32::new(25),
///     ..ListFilters::default()
/// };
/// assert!(filters.to_query_string().starts_with("?near="));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub location: Option<LocationQuery>,
    /// Keep records captured on or before this calendar date.
    pub timestamp_before: Option<NaiveDate>,
    /// Keep records captured on or after this calendar date.
    pub timestamp_after: Option<NaiveDate>,
    /// Cap on the number of records per page. Zero is unrepresentable;
    /// leave the filter unset to use the server default.
    pub limit_results: Option<NonZeroU32>,
}

impl ListFilters {
    /// Builds the query string these filters stand for.
    ///
    /// The wire contract, in emission order:
    /// `near={longitude},{latitude}` (longitude first, the x,y order of the
    /// API), `radius={meters}`, `srid={epsg}`, `timestamp_before` and
    /// `timestamp_after` as ISO-8601 calendar dates (`YYYY-MM-DD`), and
    /// `limit_results={n}`. Parameters are joined with `&` and the whole
    /// string is prefixed with `?`; with no filters set the result is the
    /// empty string.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(location) = &self.location {
            params.push(format!("near={},{}", location.longitude, location.latitude));
            params.push(format!("radius={}", location.radius));
            params.push(format!("srid={}", u32::from(location.srid)));
        }
        if let Some(before) = &self.timestamp_before {
            params.push(format!("timestamp_before={before}"));
        }
        if let Some(after) = &self.timestamp_after {
            params.push(format!("timestamp_after={after}"));
        }
        if let Some(limit) = &self.limit_results {
            params.push(format!("limit_results={limit}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Deserialize;
use strum_macros::{Display, EnumString, IntoStaticStr};
use url::Url;

/// Legal equirectangular image sizes.
///
/// Selects which of the record's image links a download follows. The wire
/// names are the lowercase variant names (`small`, `medium`, `full`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ImageSize {
    /// 2000px wide equirectangular image.
    Small,
    /// 4000px wide equirectangular image.
    #[default]
    Medium,
    /// 8000px wide equirectangular image.
    Full,
}

/// Spatial reference systems accepted by the API, by EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum SpatialReference {
    /// WGS84 geographic coordinates, longitude/latitude in degrees.
    #[default]
    Wgs84 = 4326,
    /// Amersfoort / RD New, the Dutch projected system, x/y in meters.
    RdNew = 28992,
}

/// An optional URL reference embedded in API responses.
///
/// An absent href (`null` or missing on the wire) means the target is not
/// available; it is the sole signal of a pagination boundary and of a
/// missing image variant. A present-but-empty href is not a URL and is
/// rejected during deserialization.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Link {
    #[serde(default)]
    pub href: Option<Url>,
}

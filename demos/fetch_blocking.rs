/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate panoramas;

use anyhow::Result;
use panoramas::blocking::Client;

// A known public record id, used by the API docs themselves.
const PANO_ID: &str = "TMX7315120208-000020_pano_0000_000178";

// Fetches one record and its thumbnail without an async runtime.
fn main() -> Result<()> {
    env_logger::init();

    let client = Client::new();

    let panorama = client.get_panorama(PANO_ID)?;
    println!("Fetched {panorama}");
    println!(
        "Captured {} at {:?} (heading {:.1})",
        panorama.timestamp, panorama.geometry.coordinates, panorama.heading
    );

    if let Some(href) = panorama.links.thumbnail.href.as_ref() {
        let thumbnail = client.get_bytes(href.as_str())?;
        println!("Thumbnail is {} bytes", thumbnail.len());
    }

    Ok(())
}

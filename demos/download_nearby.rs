/*
 * Copyright (c) 2026 Panoramas Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate panoramas;

use anyhow::Result;
use futures::{StreamExt, pin_mut};
use panoramas::{Client, ImageSize, ListFilters, LocationQuery};
use std::num::NonZeroU32;

// Lists the panoramas captured near Dam Square in 2017 and downloads the
// medium image of the first one into the working directory.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = Client::new();

    let filters = ListFilters {
        location: Some(LocationQuery {
            radius: 250,
            ..LocationQuery::new(52.3731, 4.8932)
        }),
        timestamp_after: chrono::NaiveDate::from_ymd_opt(2017, 1, 1),
        timestamp_before: chrono::NaiveDate::from_ymd_opt(2018, 1, 1),
        limit_results: NonZeroU32::new(10),
        ..ListFilters::default()
    };

    let page = client.list_panoramas(&filters).await?;
    println!("Found {} panoramas near Dam Square", page.count);

    let records = client.stream_panoramas(filters);
    pin_mut!(records);
    if let Some(panorama) = records.next().await.transpose()? {
        println!("Downloading image for {panorama}");
        let path = client
            .download_image(&panorama, ImageSize::Medium, ".")
            .await?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate fleakr;

use anyhow::Result;
use dotenvy::dotenv;
use fleakr::rest::{Client, Creds, ImageSize, Photo, Set, User};
use std::path::{Path, PathBuf};
use std::str::FromStr;

// Downloads every photo of a set and reports where it landed.
async fn download_set(set: &Set, dir: &Path, size: ImageSize) -> Result<usize> {
    let photos = set.photos().await?;
    for photo in &photos {
        let path = photo.save_to(dir, size).await?;
        println!("Saved {} to {}", photo, path.display());
    }
    Ok(photos.len())
}

// Shows the lazily loaded details of the first photo.
async fn describe(mut photo: Photo) -> Result<()> {
    println!("First photo: {}", photo);
    println!("  description: {}", photo.description().await?.unwrap_or("-"));
    if let Some(posted) = photo.posted_at().await? {
        println!("  posted:      {}", posted);
    }
    if let Some(taken) = photo.taken_at().await? {
        println!("  taken:       {}", taken);
    }
    println!("  page:        {}", photo.url().await?.unwrap_or("-"));
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // Usage: photo_downloading <username> [size] [dir]
    let mut args = std::env::args().skip(1);
    let username = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: photo_downloading <username> [size] [dir]"))?;
    let size = ImageSize::from_str(&args.next().unwrap_or_else(|| "medium".to_string()))?;
    let dir: PathBuf = args.next().unwrap_or_else(|| ".".to_string()).into();

    let client = Client::new(Creds::from_env()?);
    let user = User::find_by_username(client, &username).await?;

    let sets = user.sets().await?;
    let Some(set) = sets.first() else {
        println!("{} has no sets", user);
        return Ok(());
    };

    println!("Downloading set: {}", set.title().unwrap_or_default());
    let count = download_set(set, &dir, size).await?;
    println!("Downloaded {} photos", count);

    if let Some(photo) = user.photos().await?.into_iter().next() {
        describe(photo).await?;
    }
    Ok(())
}

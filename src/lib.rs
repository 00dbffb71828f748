/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Fleakr
//!
//! This library maps the Flickr REST API onto plain Rust objects.
//!
//! For further details on the API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Users
//!     - Look up by username, email or id
//!     - Profile details are fetched the first time they are read
//!     - List a user's sets, groups, photos and contacts
//! - Photos
//!     - Image urls for every size, downloading to disk
//!     - Upload/taken dates
//! - Photo sets and groups along with their photos
//! - Photo search by text and tags
//! - Lower level interface for handling the raw communication
//!
//! *Only read calls that need nothing more than an API key are supported.
//! Requests are not signed.*
//!
//! *If you want to call a method that is not wrapped here, [`rest::Client::call`]
//! returns the verified XML response directly*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! fleakr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use fleakr::rest::{Client, Creds, FleakrError, ImageSize, User};
//! use std::path::Path;
//!
//! async fn save_thumbnails(api_key: &str, username: &str) -> Result<(), FleakrError> {
//!     let client = Client::new(Creds::from_api_key(api_key));
//!
//!     // One call to people.findByUsername
//!     let mut user = User::find_by_username(client, username).await?;
//!
//!     // The first profile field read calls people.getInfo, the rest are free
//!     let name = user.name().await?.map(str::to_string);
//!     println!("{:?} ({:?} photos)", name, user.photos_count().await?);
//!     println!("buddy icon: {}", user.icon_url().await?);
//!
//!     for set in user.sets().await? {
//!         for photo in set.photos().await? {
//!             photo.save_to(Path::new("."), ImageSize::Thumbnail).await?;
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::errors::FleakrError;
use crate::rest::{ApiClient, ApiParams, Creds, Transport, XmlResponse};
use bytes::Bytes;
use std::sync::Arc;

/// Handle shared by every object fetched from Flickr.
///
/// Cloning is cheap; all clones talk through the same [`Transport`].
///
/// ```rust,no_run
/// use fleakr::rest::{Client, Creds, User};
///
/// async fn show(api_key: &str) -> Result<(), fleakr::rest::FleakrError> {
///     let client = Client::new(Creds::from_api_key(api_key));
///     let mut user = User::find_by_username(client, "mountain_dew").await?;
///     let name = user.name().await?.map(str::to_string);
///     println!("{:?} has {:?} photos", name, user.photos_count().await?);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(ApiClient::new(creds))
    }

    /// Uses the provided transport for all remote calls
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Invokes an API method and returns the verified response
    pub async fn call(
        &self,
        method: &str,
        params: &ApiParams<'_>,
    ) -> Result<XmlResponse, FleakrError> {
        let body = self.transport.invoke(method, params).await?;
        XmlResponse::from_body(body)
    }

    /// Fetches a static asset such as an image
    pub async fn download(&self, url: &str) -> Result<Bytes, FleakrError> {
        self.transport.download(url).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

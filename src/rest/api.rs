/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FleakrError;
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use num_enum::TryFromPrimitive;

// Root Flickr REST endpoint
pub const API_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

// Environment variable holding the API key
pub const API_KEY_ENV: &str = "FLICKR_API_KEY";

/// This can be filter types as well as other parameters the specific API method expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// The remote side of every Flickr object.
///
/// `invoke` performs a single API method call and returns the raw XML body,
/// `download` fetches a static asset such as a photo.
pub trait Transport: Send + Sync {
    fn invoke<'a>(
        &'a self,
        method: &'a str,
        params: &'a ApiParams<'a>,
    ) -> BoxFuture<'a, Result<String, FleakrError>>;

    fn download<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Bytes, FleakrError>>;
}

/// Directly communicates with the API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    creds: Creds,
    endpoint: String,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new Flickr client instance from the provided credentials
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            endpoint: API_ENDPOINT.to_string(),
            https_client: reqwest::Client::new(),
        }
    }

    /// Points this client at a different REST endpoint
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Performs a get request for the given API method
    pub async fn get(&self, method: &str, params: &ApiParams<'_>) -> Result<String, FleakrError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", self.creds.api_key.as_str()),
        ];
        query.extend_from_slice(params);
        let req_url = reqwest::Url::parse_with_params(&self.endpoint, &query)?;

        log::debug!("Calling {} with {:?}", method, params);
        let body = self
            .https_client
            .get(req_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    /// Retrieves the raw bytes at the provided url
    pub async fn get_bytes(&self, url: &str) -> Result<Bytes, FleakrError> {
        log::debug!("Downloading {}", url);
        let data = self
            .https_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(data)
    }
}

impl Transport for ApiClient {
    fn invoke<'a>(
        &'a self,
        method: &'a str,
        params: &'a ApiParams<'a>,
    ) -> BoxFuture<'a, Result<String, FleakrError>> {
        self.get(method, params).boxed()
    }

    fn download<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Bytes, FleakrError>> {
        self.get_bytes(url).boxed()
    }
}

/// Credentials used when talking to Flickr
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
}

impl Creds {
    pub fn from_api_key(api_key: &str) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Reads the API key from the `FLICKR_API_KEY` environment variable
    pub fn from_env() -> Result<Self, FleakrError> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| Self::from_api_key(&v))
            .ok_or_else(|| FleakrError::Auth(format!("{} is not set", API_KEY_ENV)))
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds").field("api_key", &"xxx").finish()
    }
}

/// Error codes shared by every method per the Flickr API site
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// Holds the body of a successful `<rsp stat="ok">` response
#[derive(Debug, Clone)]
pub struct XmlResponse {
    body: String,
}

impl XmlResponse {
    /// Verifies the envelope of a raw response body
    pub fn from_body(body: String) -> Result<Self, FleakrError> {
        check_envelope(&body)?;
        Ok(Self { body })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body into a document whose root element is `<rsp>`
    pub fn parse(&self) -> Result<roxmltree::Document<'_>, FleakrError> {
        Ok(roxmltree::Document::parse(&self.body)?)
    }
}

// Turns a `<rsp stat="fail">` envelope into an error
fn check_envelope(body: &str) -> Result<(), FleakrError> {
    let document = roxmltree::Document::parse(body)?;
    let root = document.root_element();
    if !root.has_tag_name("rsp") {
        return Err(FleakrError::ApiResponseMalformed(format!(
            "expected <rsp>, found <{}>",
            root.tag_name().name()
        )));
    }

    match root.attribute("stat") {
        Some("ok") => Ok(()),
        Some("fail") => {
            let err = root.children().find(|n| n.has_tag_name("err"));
            let code = err
                .and_then(|e| e.attribute("code"))
                .and_then(|c| c.parse::<u32>().ok())
                .unwrap_or_default();
            let msg = err
                .and_then(|e| e.attribute("msg"))
                .unwrap_or_default()
                .to_string();
            Err(FleakrError::ApiResponse(code, msg))
        }
        other => Err(FleakrError::ApiResponseMalformed(format!(
            "unexpected stat {:?}",
            other
        ))),
    }
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::ApiErrorCodes;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FleakrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Authorization error. {0}")]
    Auth(String),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Expected response missing")]
    ResponseMissing(),

    #[error("Cannot look up {0} without an id")]
    MissingId(&'static str),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),

    #[error("API Response is malformed: {0}")]
    ApiResponseMalformed(String),
}

impl FleakrError {
    /// Returns the Flickr-wide error code when this is a failed API response carrying one.
    ///
    /// Method specific codes (such as `1` for "User not found") are not part of
    /// [`ApiErrorCodes`] and yield `None`.
    pub fn api_error_code(&self) -> Option<ApiErrorCodes> {
        match self {
            FleakrError::ApiResponse(code, _) => ApiErrorCodes::try_from(*code).ok(),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for FleakrError {
    fn from(err: roxmltree::Error) -> Self {
        FleakrError::ApiResponseMalformed(err.to_string())
    }
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Canned transport for unit tests

use crate::rest::errors::FleakrError;
use crate::rest::{ApiParams, Client, Transport};
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub(crate) type Call = (String, Vec<(String, String)>);

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: HashMap<String, String>,
    failing: Vec<String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers `method` with the given XML body every time it is called
    pub(crate) fn respond(mut self, method: &str, body: &str) -> Self {
        self.responses.insert(method.to_string(), body.to_string());
        self
    }

    /// Makes `method` fail as if the network was down
    pub(crate) fn fail(mut self, method: &str) -> Self {
        self.failing.push(method.to_string());
        self
    }

    /// Builds a client along with a log of the calls it makes
    pub(crate) fn into_client(self) -> (Client, Arc<Mutex<Vec<Call>>>) {
        let calls = self.calls.clone();
        (Client::with_transport(self), calls)
    }
}

impl Transport for ScriptedTransport {
    fn invoke<'a>(
        &'a self,
        method: &'a str,
        params: &'a ApiParams<'a>,
    ) -> BoxFuture<'a, Result<String, FleakrError>> {
        let params = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((method.to_string(), params));
        }

        let result = if self.failing.iter().any(|m| m == method) {
            Err(FleakrError::Io(std::io::Error::other("connection reset")))
        } else {
            self.responses
                .get(method)
                .cloned()
                .ok_or(FleakrError::ApiResponse(112, format!("Method \"{}\" not found", method)))
        };
        async move { result }.boxed()
    }

    fn download<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Bytes, FleakrError>> {
        let result = Ok(Bytes::from(url.to_string()));
        async move { result }.boxed()
    }
}

pub(crate) fn calls_to(calls: &Arc<Mutex<Vec<Call>>>, method: &str) -> usize {
    calls
        .lock()
        .map(|c| c.iter().filter(|(m, _)| m == method).count())
        .unwrap_or_default()
}

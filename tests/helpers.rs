/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use fleakr::rest::{ApiClient, Client, Creds};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use wiremock::MockServer;

pub(crate) const TEST_API_KEY: &str = "test-api-key";

#[derive(Deserialize, Debug)]
struct FlickrKeyFile {
    api_key: String,
}

fn get_key_from_file(path: PathBuf) -> anyhow::Result<FlickrKeyFile> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Credentials for the live API, from `FLICKR_API_KEY` or the JSON file named by `FLICKR_KEY_FILE`
#[allow(dead_code)]
pub(crate) fn get_live_creds() -> anyhow::Result<Creds> {
    if let Ok(creds) = Creds::from_env() {
        return Ok(creds);
    }
    let key_file = std::env::var("FLICKR_KEY_FILE")?;
    let key = get_key_from_file(key_file.into())?;
    Ok(Creds::from_api_key(&key.api_key))
}

/// A client whose REST endpoint is the given mock server
#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    Client::with_transport(mock_api_client(server))
}

#[allow(dead_code)]
pub(crate) fn mock_api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(Creds::from_api_key(TEST_API_KEY))
        .with_endpoint(&format!("{}/services/rest/", server.uri()))
}

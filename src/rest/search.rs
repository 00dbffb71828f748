/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FleakrError;
use crate::rest::macros::objs_from_call;
use crate::rest::{Client, Photo};

/// A `photos.search` query.
///
/// ```rust,no_run
/// # use fleakr::rest::{Client, Creds, Search};
/// # async fn run(client: Client) -> Result<(), fleakr::rest::FleakrError> {
/// let photos = Search::new(client).text("sunset").tags(&["beach", "ocean"]).photos().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Search {
    client: Client,
    text: Option<String>,
    tags: Vec<String>,
    user_id: Option<String>,
}

impl Search {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            text: None,
            tags: Vec::new(),
            user_id: None,
        }
    }

    /// Matches photos whose title, description or tags contain `text`
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    /// Limits the search to a single user's photos
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    // Query parameters in the order Flickr documents them
    fn params(&self) -> Vec<(&str, String)> {
        let mut params = Vec::new();
        if let Some(user_id) = &self.user_id {
            params.push(("user_id", user_id.clone()));
        }
        if !self.tags.is_empty() {
            params.push(("tags", self.tags.join(",")));
        }
        if let Some(text) = &self.text {
            params.push(("text", text.clone()));
        }
        params
    }

    /// Runs the search
    pub async fn photos(&self) -> Result<Vec<Photo>, FleakrError> {
        let owned = self.params();
        let params: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
        Ok(objs_from_call!(
            self.client,
            "photos.search",
            &params,
            "photos/photo",
            Photo
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rest::User;
    use crate::rest::testing::ScriptedTransport;

    const RESULTS: &str = r#"<rsp stat="ok">
        <photos page="2" pages="89" perpage="10" total="881">
            <photo id="2636" owner="47058503995@N01" secret="a123456" server="2" title="test_04"
                ispublic="1" isfriend="0" isfamily="0" />
        </photos>
    </rsp>"#;

    fn sent_params(calls: &[crate::rest::testing::Call]) -> Vec<(String, String)> {
        calls[calls.len() - 1].1.clone()
    }

    #[tokio::test]
    async fn searches_by_text_and_tags() {
        let (client, calls) = ScriptedTransport::new()
            .respond("photos.search", RESULTS)
            .into_client();

        let photos = Search::new(client)
            .text("cat")
            .tag("pets")
            .tags(&["cute", "fluffy"])
            .photos()
            .await
            .unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id(), Some("2636"));

        let calls = calls.lock().unwrap();
        assert_eq!(
            sent_params(&calls),
            vec![
                ("tags".to_string(), "pets,cute,fluffy".to_string()),
                ("text".to_string(), "cat".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn user_search_is_scoped_to_user() {
        let (client, calls) = ScriptedTransport::new()
            .respond("photos.search", RESULTS)
            .into_client();

        let user = User::from_xml(client, r#"<user nsid="47058503995@N01"/>"#).unwrap();
        user.search("test").await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            sent_params(&calls),
            vec![
                ("user_id".to_string(), "47058503995@N01".to_string()),
                ("text".to_string(), "test".to_string()),
            ]
        );
    }
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::attributes::{self, Attribute, FlickrObject};
use crate::rest::errors::FleakrError;
use crate::rest::macros::objs_from_call;
use crate::rest::{Client, Photo};
use roxmltree::Node;
use serde::Serialize;

/// Fields of a [`Set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Id,
    Title,
    Description,
    Count,
    PrimaryPhotoId,
}

/// A photo set ("photoset" in the Flickr API).
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photosets.getList.html) for more
/// details on the individual fields.
#[derive(Serialize, Debug, Clone)]
pub struct Set {
    #[serde(skip)]
    pub(crate) client: Client,

    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    count: Option<String>,
    primary_photo_id: Option<String>,
}

impl Set {
    pub(crate) fn from_node(client: Client, node: Node<'_, '_>) -> Self {
        let mut set = Self {
            client,
            id: None,
            title: None,
            description: None,
            count: None,
            primary_photo_id: None,
        };
        set.populate_from(node);
        set
    }

    /// Returns the photo sets of the specified user
    pub async fn find_all_by_user_id(
        client: Client,
        user_id: &str,
    ) -> Result<Vec<Self>, FleakrError> {
        let params = [("user_id", user_id)];
        Ok(objs_from_call!(
            client,
            "photosets.getList",
            &params,
            "photosets/photoset",
            Set
        ))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of photos in the set as reported by Flickr
    pub fn count(&self) -> i64 {
        attributes::to_int(self.count.as_deref())
    }

    pub fn primary_photo_id(&self) -> Option<&str> {
        self.primary_photo_id.as_deref()
    }

    /// Retrieves the photos in this set
    pub async fn photos(&self) -> Result<Vec<Photo>, FleakrError> {
        let id = self.id().ok_or(FleakrError::MissingId("set"))?;
        Photo::find_all_by_photoset_id(self.client.clone(), id).await
    }
}

impl FlickrObject for Set {
    type Field = SetField;

    const ATTRIBUTES: &'static [Attribute<SetField>] = &[
        Attribute {
            field: SetField::Id,
            locations: &["@id"],
        },
        Attribute {
            field: SetField::Title,
            locations: &["title"],
        },
        Attribute {
            field: SetField::Description,
            locations: &["description"],
        },
        Attribute {
            field: SetField::Count,
            locations: &["@photos"],
        },
        Attribute {
            field: SetField::PrimaryPhotoId,
            locations: &["@primary"],
        },
    ];

    fn slot(&mut self, field: SetField) -> &mut Option<String> {
        match field {
            SetField::Id => &mut self.id,
            SetField::Title => &mut self.title,
            SetField::Description => &mut self.description,
            SetField::Count => &mut self.count,
            SetField::PrimaryPhotoId => &mut self.primary_photo_id,
        }
    }
}

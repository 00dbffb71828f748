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

/// Fields of a [`Group`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Id,
    Name,
    Adult,
}

/// A Flickr group
#[derive(Serialize, Debug, Clone)]
pub struct Group {
    #[serde(skip)]
    pub(crate) client: Client,

    id: Option<String>,
    name: Option<String>,
    adult: Option<String>,
}

impl Group {
    pub(crate) fn from_node(client: Client, node: Node<'_, '_>) -> Self {
        let mut group = Self {
            client,
            id: None,
            name: None,
            adult: None,
        };
        group.populate_from(node);
        group
    }

    /// Returns the public groups the specified user belongs to
    pub async fn find_all_by_user_id(
        client: Client,
        user_id: &str,
    ) -> Result<Vec<Self>, FleakrError> {
        let params = [("user_id", user_id)];
        Ok(objs_from_call!(
            client,
            "people.getPublicGroups",
            &params,
            "groups/group",
            Group
        ))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the group is restricted to members over eighteen
    pub fn is_adult(&self) -> bool {
        attributes::to_flag(self.adult.as_deref())
    }

    /// Retrieves the photos in this group's pool
    pub async fn photos(&self) -> Result<Vec<Photo>, FleakrError> {
        let id = self.id().ok_or(FleakrError::MissingId("group"))?;
        Photo::find_all_by_group_id(self.client.clone(), id).await
    }
}

impl FlickrObject for Group {
    type Field = GroupField;

    const ATTRIBUTES: &'static [Attribute<GroupField>] = &[
        Attribute {
            field: GroupField::Id,
            locations: &["@nsid", "@id"],
        },
        Attribute {
            field: GroupField::Name,
            locations: &["@name", "name"],
        },
        Attribute {
            field: GroupField::Adult,
            locations: &["@eighteenplus"],
        },
    ];

    fn slot(&mut self, field: GroupField) -> &mut Option<String> {
        match field {
            GroupField::Id => &mut self.id,
            GroupField::Name => &mut self.name,
            GroupField::Adult => &mut self.adult,
        }
    }
}

/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::attributes::{self, Attribute, FlickrObject, LazyObject};
use crate::rest::errors::FleakrError;
use crate::rest::macros::{obj_from_call, objs_from_call};
use crate::rest::{Client, Group, Photo, Search, Set};
use roxmltree::Node;
use serde::Serialize;

/// Fields of a [`User`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Username,
    Name,
    PhotosUrl,
    ProfileUrl,
    PhotosCount,
    IconServer,
    IconFarm,
    Pro,
    Admin,
}

/// A Flickr member.
///
/// The id and username come back from the lookup calls. Everything else is
/// only returned by `people.getInfo`, which is called the first time one of
/// those fields is read.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.getInfo.html) for more
/// details on the individual fields.
#[derive(Serialize, Debug, Clone)]
pub struct User {
    #[serde(skip)]
    pub(crate) client: Client,

    id: Option<String>,
    username: Option<String>,
    name: Option<String>,
    photos_url: Option<String>,
    profile_url: Option<String>,
    photos_count: Option<String>,
    icon_server: Option<String>,
    icon_farm: Option<String>,
    pro: Option<String>,
    admin: Option<String>,

    #[serde(skip)]
    info_loaded: bool,
}

impl User {
    const DEFAULT_ICON_URL: &'static str = "http://www.flickr.com/images/buddyicon.jpg";

    /// Creates a user with no fields set
    pub fn new(client: Client) -> Self {
        Self {
            client,
            id: None,
            username: None,
            name: None,
            photos_url: None,
            profile_url: None,
            photos_count: None,
            icon_server: None,
            icon_farm: None,
            pro: None,
            admin: None,
            info_loaded: false,
        }
    }

    pub(crate) fn from_node(client: Client, node: Node<'_, '_>) -> Self {
        let mut user = Self::new(client);
        user.populate_from(node);
        user
    }

    /// Creates a user from an XML fragment such as a `<user>`, `<person>` or `<contact>` element
    pub fn from_xml(client: Client, xml: &str) -> Result<Self, FleakrError> {
        let document = roxmltree::Document::parse(xml)?;
        Ok(Self::from_node(client, document.root_element()))
    }

    /// Looks up a user by their screen name
    pub async fn find_by_username(client: Client, username: &str) -> Result<Self, FleakrError> {
        let params = [("username", username)];
        Ok(obj_from_call!(client, "people.findByUsername", &params, User))
    }

    /// Looks up a user by their email address
    pub async fn find_by_email(client: Client, email: &str) -> Result<Self, FleakrError> {
        let params = [("find_email", email)];
        Ok(obj_from_call!(client, "people.findByEmail", &params, User))
    }

    /// Returns the fully loaded user for the specified id
    pub async fn find_by_id(client: Client, id: &str) -> Result<Self, FleakrError> {
        let params = [("user_id", id)];
        let mut user = obj_from_call!(client, "people.getInfo", &params, User);
        user.info_loaded = true;
        Ok(user)
    }

    /// Returns the public contacts of the specified user
    pub async fn find_all_contacts_by_user_id(
        client: Client,
        user_id: &str,
    ) -> Result<Vec<Self>, FleakrError> {
        let params = [("user_id", user_id)];
        Ok(objs_from_call!(
            client,
            "contacts.getPublicList",
            &params,
            "contacts/contact",
            User
        ))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// True once `people.getInfo` has been applied to this user
    pub fn is_info_loaded(&self) -> bool {
        self.info_loaded
    }

    /// Returns the raw value of any field, loading the user's info first if the field needs it
    pub async fn get(&mut self, field: UserField) -> Result<Option<&str>, FleakrError> {
        attributes::get(self, field).await
    }

    pub async fn name(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(UserField::Name).await
    }

    pub async fn photos_url(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(UserField::PhotosUrl).await
    }

    pub async fn profile_url(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(UserField::ProfileUrl).await
    }

    pub async fn photos_count(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(UserField::PhotosCount).await
    }

    pub async fn icon_server(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(UserField::IconServer).await
    }

    pub async fn icon_farm(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(UserField::IconFarm).await
    }

    /// Whether this is a paying member
    pub async fn is_pro(&mut self) -> Result<bool, FleakrError> {
        Ok(attributes::to_flag(self.get(UserField::Pro).await?))
    }

    pub async fn is_admin(&mut self) -> Result<bool, FleakrError> {
        Ok(attributes::to_flag(self.get(UserField::Admin).await?))
    }

    /// Url of the user's buddy icon, or Flickr's stock icon when they have none
    pub async fn icon_url(&mut self) -> Result<String, FleakrError> {
        let server = self.icon_server().await?.map(str::to_string);
        let farm = self.icon_farm().await?.map(str::to_string);
        Ok(icon_url_for(
            self.id(),
            server.as_deref(),
            farm.as_deref(),
        ))
    }

    /// Retrieves this user's photo sets
    pub async fn sets(&self) -> Result<Vec<Set>, FleakrError> {
        Set::find_all_by_user_id(self.client.clone(), self.require_id()?).await
    }

    /// Retrieves the public groups this user belongs to
    pub async fn groups(&self) -> Result<Vec<Group>, FleakrError> {
        Group::find_all_by_user_id(self.client.clone(), self.require_id()?).await
    }

    /// Retrieves this user's public photos
    pub async fn photos(&self) -> Result<Vec<Photo>, FleakrError> {
        Photo::find_all_by_user_id(self.client.clone(), self.require_id()?).await
    }

    /// Retrieves this user's public contacts
    pub async fn contacts(&self) -> Result<Vec<User>, FleakrError> {
        Self::find_all_contacts_by_user_id(self.client.clone(), self.require_id()?).await
    }

    /// Searches this user's photos for the given text
    pub async fn search(&self, text: &str) -> Result<Vec<Photo>, FleakrError> {
        Search::new(self.client.clone())
            .text(text)
            .user_id(self.require_id()?)
            .photos()
            .await
    }

    fn require_id(&self) -> Result<&str, FleakrError> {
        self.id().ok_or(FleakrError::MissingId(Self::KIND))
    }
}

fn icon_url_for(id: Option<&str>, server: Option<&str>, farm: Option<&str>) -> String {
    match server {
        Some(server) if attributes::to_int(Some(server)) > 0 => format!(
            "http://farm{}.static.flickr.com/{}/buddyicons/{}.jpg",
            farm.unwrap_or_default(),
            server,
            id.unwrap_or_default()
        ),
        _ => User::DEFAULT_ICON_URL.to_string(),
    }
}

impl FlickrObject for User {
    type Field = UserField;

    const ATTRIBUTES: &'static [Attribute<UserField>] = &[
        Attribute {
            field: UserField::Id,
            locations: &["user@nsid", "person@nsid", "contact@nsid"],
        },
        Attribute {
            field: UserField::Username,
            locations: &["username", "contact@username"],
        },
        Attribute {
            field: UserField::Name,
            locations: &["person/realname", "contact@realname"],
        },
        Attribute {
            field: UserField::PhotosUrl,
            locations: &["person/photosurl"],
        },
        Attribute {
            field: UserField::ProfileUrl,
            locations: &["person/profileurl"],
        },
        Attribute {
            field: UserField::PhotosCount,
            locations: &["person/photos/count"],
        },
        Attribute {
            field: UserField::IconServer,
            locations: &["person@iconserver", "contact@iconserver"],
        },
        Attribute {
            field: UserField::IconFarm,
            locations: &["person@iconfarm", "contact@iconfarm"],
        },
        Attribute {
            field: UserField::Pro,
            locations: &["person@ispro"],
        },
        Attribute {
            field: UserField::Admin,
            locations: &["person@isadmin"],
        },
    ];

    fn slot(&mut self, field: UserField) -> &mut Option<String> {
        match field {
            UserField::Id => &mut self.id,
            UserField::Username => &mut self.username,
            UserField::Name => &mut self.name,
            UserField::PhotosUrl => &mut self.photos_url,
            UserField::ProfileUrl => &mut self.profile_url,
            UserField::PhotosCount => &mut self.photos_count,
            UserField::IconServer => &mut self.icon_server,
            UserField::IconFarm => &mut self.icon_farm,
            UserField::Pro => &mut self.pro,
            UserField::Admin => &mut self.admin,
        }
    }
}

impl LazyObject for User {
    const KIND: &'static str = "user";
    const INFO_METHOD: &'static str = "people.getInfo";
    const ID_PARAM: &'static str = "user_id";
    const DETAIL: &'static [UserField] = &[
        UserField::Name,
        UserField::PhotosUrl,
        UserField::ProfileUrl,
        UserField::PhotosCount,
        UserField::IconServer,
        UserField::IconFarm,
        UserField::Pro,
        UserField::Admin,
    ];

    fn client(&self) -> &Client {
        &self.client
    }

    fn object_id(&self) -> Option<&str> {
        self.id()
    }

    fn detail_loaded(&mut self) -> &mut bool {
        &mut self.info_loaded
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "username: {}, id: {}",
            self.username().unwrap_or_default(),
            self.id().unwrap_or_default()
        )
    }
}

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
use crate::rest::{Client, ImageSize, User};
use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use roxmltree::Node;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Fields of a [`Photo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoField {
    Id,
    Title,
    Description,
    Farm,
    Server,
    Secret,
    OwnerId,
    Posted,
    Taken,
    Updated,
    CommentCount,
    Url,
}

/// Holds information returned from the photo list and `photos.getInfo` APIs.
///
/// Photos that come from a list only carry the id, title and the pieces
/// needed to build image urls. The remaining fields are loaded with one
/// `photos.getInfo` call when first read.
#[derive(Serialize, Debug, Clone)]
pub struct Photo {
    #[serde(skip)]
    pub(crate) client: Client,

    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    farm: Option<String>,
    server: Option<String>,
    secret: Option<String>,
    owner_id: Option<String>,
    posted: Option<String>,
    taken: Option<String>,
    updated: Option<String>,
    comment_count: Option<String>,
    url: Option<String>,

    #[serde(skip)]
    info_loaded: bool,
}

impl Photo {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            id: None,
            title: None,
            description: None,
            farm: None,
            server: None,
            secret: None,
            owner_id: None,
            posted: None,
            taken: None,
            updated: None,
            comment_count: None,
            url: None,
            info_loaded: false,
        }
    }

    pub(crate) fn from_node(client: Client, node: Node<'_, '_>) -> Self {
        let mut photo = Self::new(client);
        photo.populate_from(node);
        photo
    }

    /// Creates a photo from an XML fragment such as a `<photo>` list element
    pub fn from_xml(client: Client, xml: &str) -> Result<Self, FleakrError> {
        let document = roxmltree::Document::parse(xml)?;
        Ok(Self::from_node(client, document.root_element()))
    }

    /// Returns the fully loaded photo for the specified id
    pub async fn find_by_id(client: Client, id: &str) -> Result<Self, FleakrError> {
        let params = [("photo_id", id)];
        let mut photo = obj_from_call!(client, "photos.getInfo", &params, Photo);
        photo.info_loaded = true;
        Ok(photo)
    }

    /// Returns the public photos of the specified user
    pub async fn find_all_by_user_id(
        client: Client,
        user_id: &str,
    ) -> Result<Vec<Self>, FleakrError> {
        let params = [("user_id", user_id)];
        Ok(objs_from_call!(
            client,
            "people.getPublicPhotos",
            &params,
            "photos/photo",
            Photo
        ))
    }

    /// Returns the photos contained in the specified photo set
    pub async fn find_all_by_photoset_id(
        client: Client,
        photoset_id: &str,
    ) -> Result<Vec<Self>, FleakrError> {
        let params = [("photoset_id", photoset_id)];
        Ok(objs_from_call!(
            client,
            "photosets.getPhotos",
            &params,
            "photoset/photo",
            Photo
        ))
    }

    /// Returns the photos in the specified group's pool
    pub async fn find_all_by_group_id(
        client: Client,
        group_id: &str,
    ) -> Result<Vec<Self>, FleakrError> {
        let params = [("group_id", group_id)];
        Ok(objs_from_call!(
            client,
            "groups.pools.getPhotos",
            &params,
            "photos/photo",
            Photo
        ))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn farm(&self) -> Option<&str> {
        self.farm.as_deref()
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn is_info_loaded(&self) -> bool {
        self.info_loaded
    }

    /// Returns the raw value of any field, loading the photo's info first if the field needs it
    pub async fn get(&mut self, field: PhotoField) -> Result<Option<&str>, FleakrError> {
        attributes::get(self, field).await
    }

    pub async fn description(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(PhotoField::Description).await
    }

    pub async fn comment_count(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(PhotoField::CommentCount).await
    }

    /// Url of the photo's page on Flickr
    pub async fn url(&mut self) -> Result<Option<&str>, FleakrError> {
        self.get(PhotoField::Url).await
    }

    /// When the photo was uploaded
    pub async fn posted_at(&mut self) -> Result<Option<DateTime<Utc>>, FleakrError> {
        Ok(parse_timestamp(self.get(PhotoField::Posted).await?))
    }

    /// When the photo was taken, as recorded by the camera
    pub async fn taken_at(&mut self) -> Result<Option<DateTime<Utc>>, FleakrError> {
        Ok(parse_date_taken(self.get(PhotoField::Taken).await?))
    }

    pub async fn updated_at(&mut self) -> Result<Option<DateTime<Utc>>, FleakrError> {
        Ok(parse_timestamp(self.get(PhotoField::Updated).await?))
    }

    /// Url of the image file at the given size
    pub fn image_url(&self, size: ImageSize) -> String {
        format!(
            "http://farm{}.static.flickr.com/{}/{}",
            self.farm().unwrap_or_default(),
            self.server().unwrap_or_default(),
            self.file_name(size)
        )
    }

    /// Name Flickr gives the image file at the given size
    pub fn file_name(&self, size: ImageSize) -> String {
        format!(
            "{}_{}{}.jpg",
            self.id().unwrap_or_default(),
            self.secret().unwrap_or_default(),
            size.suffix()
        )
    }

    /// Downloads the image at the given size
    pub async fn download(&self, size: ImageSize) -> Result<Bytes, FleakrError> {
        self.require_id()?;
        self.client.download(&self.image_url(size)).await
    }

    /// Downloads the image at the given size into `dir` and returns the written path
    pub async fn save_to(&self, dir: &Path, size: ImageSize) -> Result<PathBuf, FleakrError> {
        let data = self.download(size).await?;
        let path = dir.join(self.file_name(size));
        std::fs::write(&path, &data)?;
        Ok(path)
    }

    /// Retrieves the user who posted this photo
    pub async fn owner(&mut self) -> Result<User, FleakrError> {
        let owner_id = self
            .get(PhotoField::OwnerId)
            .await?
            .ok_or(FleakrError::MissingId("owner"))?
            .to_string();
        User::find_by_id(self.client.clone(), &owner_id).await
    }

    fn require_id(&self) -> Result<&str, FleakrError> {
        self.id().ok_or(FleakrError::MissingId(Self::KIND))
    }
}

// Flickr reports upload and update times as unix timestamps
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|r| r.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

fn parse_date_taken(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|r| NaiveDateTime::parse_from_str(r.trim(), "%Y-%m-%d %H:%M:%S").ok())
        .map(|taken| taken.and_utc())
}

impl FlickrObject for Photo {
    type Field = PhotoField;

    const ATTRIBUTES: &'static [Attribute<PhotoField>] = &[
        Attribute {
            field: PhotoField::Id,
            locations: &["@id", "photo@id"],
        },
        Attribute {
            field: PhotoField::Title,
            locations: &["@title", "title"],
        },
        Attribute {
            field: PhotoField::Description,
            locations: &["description"],
        },
        Attribute {
            field: PhotoField::Farm,
            locations: &["@farm", "photo@farm"],
        },
        Attribute {
            field: PhotoField::Server,
            locations: &["@server", "photo@server"],
        },
        Attribute {
            field: PhotoField::Secret,
            locations: &["@secret", "photo@secret"],
        },
        Attribute {
            field: PhotoField::OwnerId,
            locations: &["@owner", "owner@nsid"],
        },
        Attribute {
            field: PhotoField::Posted,
            locations: &["dates@posted"],
        },
        Attribute {
            field: PhotoField::Taken,
            locations: &["dates@taken"],
        },
        Attribute {
            field: PhotoField::Updated,
            locations: &["dates@lastupdate"],
        },
        Attribute {
            field: PhotoField::CommentCount,
            locations: &["comments"],
        },
        Attribute {
            field: PhotoField::Url,
            locations: &["urls/url"],
        },
    ];

    fn slot(&mut self, field: PhotoField) -> &mut Option<String> {
        match field {
            PhotoField::Id => &mut self.id,
            PhotoField::Title => &mut self.title,
            PhotoField::Description => &mut self.description,
            PhotoField::Farm => &mut self.farm,
            PhotoField::Server => &mut self.server,
            PhotoField::Secret => &mut self.secret,
            PhotoField::OwnerId => &mut self.owner_id,
            PhotoField::Posted => &mut self.posted,
            PhotoField::Taken => &mut self.taken,
            PhotoField::Updated => &mut self.updated,
            PhotoField::CommentCount => &mut self.comment_count,
            PhotoField::Url => &mut self.url,
        }
    }
}

impl LazyObject for Photo {
    const KIND: &'static str = "photo";
    const INFO_METHOD: &'static str = "photos.getInfo";
    const ID_PARAM: &'static str = "photo_id";
    const DETAIL: &'static [PhotoField] = &[
        PhotoField::Description,
        PhotoField::OwnerId,
        PhotoField::Posted,
        PhotoField::Taken,
        PhotoField::Updated,
        PhotoField::CommentCount,
        PhotoField::Url,
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

impl std::fmt::Display for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "title: {}, id: {}",
            self.title().unwrap_or_default(),
            self.id().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rest::testing::{ScriptedTransport, calls_to};
    use chrono::TimeZone;

    const PUBLIC_PHOTOS: &str = r#"<rsp stat="ok">
        <photos page="1" pages="1" perpage="100" total="2">
            <photo id="2636" owner="47058503995@N01" secret="a123456" server="2" farm="1"
                title="test_04" ispublic="1" isfriend="0" isfamily="0" />
            <photo id="2635" owner="47058503995@N01" secret="b123456" server="2" farm="1"
                title="test_03" ispublic="1" isfriend="0" isfamily="0" />
        </photos>
    </rsp>"#;

    const PHOTO_INFO: &str = r#"<rsp stat="ok">
        <photo id="2636" secret="a123456" server="2" farm="1" dateuploaded="1092951596" isfavorite="0">
            <owner nsid="47058503995@N01" username="bees" realname="Cal Henderson" location="Bedford, UK" />
            <title>test_04</title>
            <description>My cat &amp; me</description>
            <dates posted="1092951596" taken="2004-08-19 17:39:56" takengranularity="0" lastupdate="1093022469" />
            <comments>3</comments>
            <urls>
                <url type="photopage">http://www.flickr.com/photos/bees/2636/</url>
            </urls>
        </photo>
    </rsp>"#;

    #[tokio::test]
    async fn lists_public_photos_in_order() {
        let (client, calls) = ScriptedTransport::new()
            .respond("people.getPublicPhotos", PUBLIC_PHOTOS)
            .into_client();

        let photos = Photo::find_all_by_user_id(client, "47058503995@N01").await.unwrap();
        let titles: Vec<_> = photos.iter().filter_map(|p| p.title()).collect();
        assert_eq!(titles, vec!["test_04", "test_03"]);
        assert_eq!(photos[1].secret(), Some("b123456"));
        assert_eq!(photos[0].owner_id(), Some("47058503995@N01"));

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[0].1,
            vec![("user_id".to_string(), "47058503995@N01".to_string())]
        );
    }

    #[tokio::test]
    async fn details_load_once_on_first_read() {
        let (client, calls) = ScriptedTransport::new()
            .respond("people.getPublicPhotos", PUBLIC_PHOTOS)
            .respond("photos.getInfo", PHOTO_INFO)
            .into_client();

        let mut photos = Photo::find_all_by_user_id(client, "47058503995@N01").await.unwrap();
        let photo = &mut photos[0];
        assert_eq!(photo.description().await.unwrap(), Some("My cat & me"));
        assert_eq!(photo.comment_count().await.unwrap(), Some("3"));
        assert_eq!(
            photo.url().await.unwrap(),
            Some("http://www.flickr.com/photos/bees/2636/")
        );
        assert_eq!(
            photo.posted_at().await.unwrap(),
            Utc.timestamp_opt(1092951596, 0).single()
        );
        assert_eq!(
            photo.taken_at().await.unwrap(),
            Utc.with_ymd_and_hms(2004, 8, 19, 17, 39, 56).single()
        );
        assert_eq!(
            photo.updated_at().await.unwrap(),
            Utc.timestamp_opt(1093022469, 0).single()
        );
        assert_eq!(calls_to(&calls, "photos.getInfo"), 1);
    }

    #[tokio::test]
    async fn find_by_id_reads_info_layout() {
        let (client, _) = ScriptedTransport::new()
            .respond("photos.getInfo", PHOTO_INFO)
            .into_client();

        let photo = Photo::find_by_id(client, "2636").await.unwrap();
        assert!(photo.is_info_loaded());
        assert_eq!(photo.id(), Some("2636"));
        assert_eq!(photo.title(), Some("test_04"));
        assert_eq!(photo.owner_id(), Some("47058503995@N01"));
        assert_eq!(photo.to_string(), "title: test_04, id: 2636");
    }

    #[test]
    fn image_urls_per_size() {
        let client = ScriptedTransport::new().into_client().0;
        let photo = Photo::from_xml(
            client,
            r#"<photo id="2636" secret="a123456" server="2" farm="1" title="test_04"/>"#,
        )
        .unwrap();

        assert_eq!(
            photo.image_url(ImageSize::Square),
            "http://farm1.static.flickr.com/2/2636_a123456_s.jpg"
        );
        assert_eq!(
            photo.image_url(ImageSize::Thumbnail),
            "http://farm1.static.flickr.com/2/2636_a123456_t.jpg"
        );
        assert_eq!(
            photo.image_url(ImageSize::Small),
            "http://farm1.static.flickr.com/2/2636_a123456_m.jpg"
        );
        assert_eq!(
            photo.image_url(ImageSize::Medium),
            "http://farm1.static.flickr.com/2/2636_a123456.jpg"
        );
        assert_eq!(
            photo.image_url(ImageSize::Large),
            "http://farm1.static.flickr.com/2/2636_a123456_b.jpg"
        );
    }

    #[tokio::test]
    async fn saves_image_into_directory() {
        let client = ScriptedTransport::new().into_client().0;
        let photo = Photo::from_xml(
            client,
            r#"<photo id="2636" secret="a123456" server="2" farm="1"/>"#,
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = photo.save_to(dir.path(), ImageSize::Small).await.unwrap();
        assert_eq!(path, dir.path().join("2636_a123456_m.jpg"));
        // The scripted transport echoes the requested url back as the body
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "http://farm1.static.flickr.com/2/2636_a123456_m.jpg"
        );
    }

    #[tokio::test]
    async fn photo_without_id_cannot_be_downloaded() {
        let photo = Photo::new(ScriptedTransport::new().into_client().0);
        assert!(matches!(
            photo.download(ImageSize::Medium).await,
            Err(FleakrError::MissingId("photo"))
        ));
    }

    #[tokio::test]
    async fn owner_of_set_photo_comes_from_info() {
        let person = r#"<rsp stat="ok"><person nsid="47058503995@N01"><username>bees</username></person></rsp>"#;
        let (client, calls) = ScriptedTransport::new()
            .respond("photos.getInfo", PHOTO_INFO)
            .respond("people.getInfo", person)
            .into_client();

        // Photos listed in a set carry no owner
        let mut photo = Photo::from_xml(
            client,
            r#"<photo id="2636" secret="a123456" server="2" farm="1" title="test_04"/>"#,
        )
        .unwrap();
        assert_eq!(photo.owner_id(), None);

        let owner = photo.owner().await.unwrap();
        assert_eq!(owner.username(), Some("bees"));
        assert!(owner.is_info_loaded());
        assert_eq!(calls_to(&calls, "photos.getInfo"), 1);
        assert_eq!(calls_to(&calls, "people.getInfo"), 1);
    }

    #[test]
    fn unparseable_dates_are_absent() {
        assert_eq!(parse_timestamp(None), None);
        assert_eq!(parse_timestamp(Some("soon")), None);
        assert_eq!(parse_date_taken(Some("2004-08-19")), None);
    }
}

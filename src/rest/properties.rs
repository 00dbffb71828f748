/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Sizes Flickr renders for every photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Square,
    Thumbnail,
    Small,
    Medium,
    Large,
}

impl ImageSize {
    /// Suffix appended to the photo file name for this size
    pub fn suffix(self) -> &'static str {
        match self {
            ImageSize::Square => "_s",
            ImageSize::Thumbnail => "_t",
            ImageSize::Small => "_m",
            ImageSize::Medium => "",
            ImageSize::Large => "_b",
        }
    }
}

//! # Share Metadata
//!
//! Open Graph and Twitter card fields for an artwork's detail page.

use serde::Serialize;

use super::artwork::Artwork;

/// Description used when an artwork has none
pub const DEFAULT_SHARE_DESCRIPTION: &str = "View this beautiful artwork";

/// Social preview metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMetadata {
    #[serde(rename = "og:title")]
    pub og_title: String,
    #[serde(rename = "og:description")]
    pub og_description: String,
    #[serde(rename = "og:image")]
    pub og_image: String,
    #[serde(rename = "og:type")]
    pub og_type: String,
    #[serde(rename = "twitter:card")]
    pub twitter_card: String,
    #[serde(rename = "twitter:title")]
    pub twitter_title: String,
    #[serde(rename = "twitter:description")]
    pub twitter_description: String,
    #[serde(rename = "twitter:image")]
    pub twitter_image: String,
}

impl ShareMetadata {
    pub fn for_artwork(artwork: &Artwork) -> Self {
        let description = artwork
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_SHARE_DESCRIPTION.to_string());

        Self {
            og_title: artwork.title.clone(),
            og_description: description.clone(),
            og_image: artwork.image_url.clone(),
            og_type: "article".to_string(),
            twitter_card: "summary_large_image".to_string(),
            twitter_title: artwork.title.clone(),
            twitter_description: description,
            twitter_image: artwork.image_url.clone(),
        }
    }
}

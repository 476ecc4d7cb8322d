//! # Sample Artworks
//!
//! Demo content for a fresh install. Sample artworks belong to the nil owner
//! and point at externally hosted images.

use chrono::DateTime;
use uuid::Uuid;

use super::artwork::Artwork;
use crate::validation::sanitize_text;

struct Sample {
    id: u128,
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    platform_link: Option<&'static str>,
    created_at: i64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: 1,
        title: "Urban Geometry",
        description: "A study in architectural forms and shadows, exploring the relationship between light and structure in modern cityscapes.",
        image_url: "https://images.unsplash.com/photo-1527576539890-dfa815648363?w=800&h=800&fit=crop&crop=center",
        platform_link: Some("https://instagram.com/p/sample1"),
        created_at: 1_718_013_600,
    },
    Sample {
        id: 2,
        title: "Minimalist Expression",
        description: "Clean lines and negative space create a dialogue between presence and absence, questioning what we see versus what we perceive.",
        image_url: "https://images.unsplash.com/photo-1488972685288-c3fd157d7c7a?w=800&h=800&fit=crop&crop=center",
        platform_link: None,
        created_at: 1_717_857_000,
    },
    Sample {
        id: 3,
        title: "Natural Patterns",
        description: "Nature's own geometry revealed through careful observation, showcasing the inherent design principles found in organic forms.",
        image_url: "https://images.unsplash.com/photo-1452960962994-acf4fd70b632?w=800&h=800&fit=crop&crop=center",
        platform_link: Some("https://behance.net/sample3"),
        created_at: 1_717_578_900,
    },
    Sample {
        id: 4,
        title: "Textural Study",
        description: "An exploration of surface and texture, where tactile qualities are translated into visual language through contrast and form.",
        image_url: "https://images.unsplash.com/photo-1487252665478-49b61b47f302?w=800&h=800&fit=crop&crop=center",
        platform_link: None,
        created_at: 1_717_346_700,
    },
];

/// The demo artworks, newest first
pub fn sample_artworks() -> Vec<Artwork> {
    SAMPLES
        .iter()
        .map(|sample| Artwork {
            id: Uuid::from_u128(sample.id),
            owner_id: Uuid::nil(),
            title: sanitize_text(sample.title),
            description: Some(sanitize_text(sample.description)),
            image_url: sample.image_url.to_string(),
            image_sha256: None,
            platform_link: sample.platform_link.map(str::to_string),
            created_at: DateTime::from_timestamp(sample.created_at, 0).unwrap_or_default(),
        })
        .collect()
}

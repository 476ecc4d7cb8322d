//! # Gallery Search

use super::artwork::Artwork;
use crate::validation::sanitize_text;

/// Shown when the main or user gallery has no artworks at all
pub const EMPTY_GALLERY_MESSAGE: &str = "Your gallery awaits its first masterpiece";

/// Case-insensitive substring match on title or description.
///
/// Stored text is HTML-escaped, so the query is matched both raw and escaped.
pub fn matches_query(artwork: &Artwork, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let raw = query.to_lowercase();
    let escaped = sanitize_text(query).to_lowercase();
    let fields = [Some(artwork.title.as_str()), artwork.description.as_deref()];

    fields.into_iter().flatten().any(|field| {
        let field = field.to_lowercase();
        field.contains(&raw) || field.contains(&escaped)
    })
}

/// Artworks matching `query`, in their original order
pub fn filter_artworks(artworks: Vec<Artwork>, query: &str) -> Vec<Artwork> {
    artworks
        .into_iter()
        .filter(|artwork| matches_query(artwork, query))
        .collect()
}

/// Empty-state message for a result set
pub fn empty_message(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        EMPTY_GALLERY_MESSAGE.to_string()
    } else {
        format!("No artworks found matching \"{}\"", query)
    }
}

//! # Gallery Scope
//!
//! Maps a request host onto the gallery it addresses.

use std::net::IpAddr;

use serde::Serialize;

/// Which gallery a request addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "username", rename_all = "lowercase")]
pub enum GalleryScope {
    /// The main site: every artwork
    Main,
    /// One artist's gallery, addressed by username
    User(String),
}

/// Resolve a `Host` header value against the configured main domains.
///
/// `localhost`, IP literals, a main domain and `www.<main>` are the main site.
/// `<label>.<main>` addresses that label's gallery. Unknown hosts with more
/// than two labels fall back to their first label.
pub fn resolve_gallery_scope<S: AsRef<str>>(host: &str, main_domains: &[S]) -> GalleryScope {
    let host = strip_port(host.trim()).trim_end_matches('.').to_ascii_lowercase();

    if host.is_empty() || host == "localhost" || is_ip_literal(&host) {
        return GalleryScope::Main;
    }

    for main in main_domains {
        let main = main.as_ref().to_ascii_lowercase();
        if host == main {
            return GalleryScope::Main;
        }

        if let Some(label) = host
            .strip_suffix(main.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
        {
            if label == "www" {
                return GalleryScope::Main;
            }
            if !label.is_empty() && !label.contains('.') {
                return GalleryScope::User(label.to_string());
            }
        }
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 && labels[0] != "www" && !labels[0].is_empty() {
        GalleryScope::User(labels[0].to_string())
    } else {
        GalleryScope::Main
    }
}

fn strip_port(host: &str) -> &str {
    // IPv6 literals keep their colons
    if let Some(end) = host.find(']') {
        return &host[..=end];
    }
    host.split(':').next().unwrap_or(host)
}

fn is_ip_literal(host: &str) -> bool {
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: &[&str] = &["gallery.com"];

    #[test]
    fn test_main_hosts() {
        assert_eq!(resolve_gallery_scope("localhost", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("localhost:8080", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("gallery.com", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("www.gallery.com", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("GALLERY.com:443", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("", MAIN), GalleryScope::Main);
    }

    #[test]
    fn test_user_subdomain() {
        assert_eq!(
            resolve_gallery_scope("inkwell.gallery.com", MAIN),
            GalleryScope::User("inkwell".to_string())
        );
        assert_eq!(
            resolve_gallery_scope("InkWell.gallery.com:3000", MAIN),
            GalleryScope::User("inkwell".to_string())
        );
    }

    #[test]
    fn test_unknown_hosts() {
        assert_eq!(
            resolve_gallery_scope("inkwell.preview.app", MAIN),
            GalleryScope::User("inkwell".to_string())
        );
        assert_eq!(resolve_gallery_scope("example.org", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("127.0.0.1:8080", MAIN), GalleryScope::Main);
        assert_eq!(resolve_gallery_scope("[::1]:8080", MAIN), GalleryScope::Main);
    }

    #[test]
    fn test_nested_subdomain_of_main() {
        // Two labels under the main domain is not a username
        assert_eq!(
            resolve_gallery_scope("a.b.gallery.com", MAIN),
            GalleryScope::User("a".to_string())
        );
    }
}

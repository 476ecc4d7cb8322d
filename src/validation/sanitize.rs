//! # Text Sanitization
//!
//! Output encoding applied to free text right before it is persisted.
//! The denylist in [`super::artwork`] is pattern matching only; this is the
//! second layer.

/// Escape `<`, `>`, `"`, `'` and `/` as HTML character entities.
pub fn sanitize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup() {
        let sanitized = sanitize_text("<b>'hi'</b>");
        assert_eq!(sanitized, "&lt;b&gt;&#x27;hi&#x27;&lt;&#x2F;b&gt;");
        for c in ['<', '>', '\'', '"', '/'] {
            assert!(!sanitized.contains(c));
        }
    }

    #[test]
    fn test_escapes_quotes() {
        assert_eq!(sanitize_text(r#"say "x""#), "say &quot;x&quot;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_text("Urban Geometry & light"), "Urban Geometry & light");
        assert_eq!(sanitize_text(""), "");
    }
}

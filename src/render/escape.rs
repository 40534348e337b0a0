//! HTML text escaping.

/// Escape a string for insertion into HTML text or attribute positions.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms. Empty input
/// yields an empty string. The one place escaping is deliberately skipped is
/// a validated `http(s)` href; see the card renderer.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y'z")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&#39;z&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_preserves_unicode() {
        assert_eq!(escape_html("café & naïve"), "café &amp; naïve");
    }
}

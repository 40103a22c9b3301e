//! HTML escaping for restored code spans

/// Escape `& < > " '` for safe embedding in HTML text
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Reverse of [`escape_html`]
#[must_use]
pub fn decode_html(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("let x = 1;"), "let x = 1;");
    }

    #[test]
    fn test_decode_restores_escaped() {
        let raw = "if (a < b && c > d) { say(\"hi\", 'there') }";
        assert_eq!(decode_html(&escape_html(raw)), raw);
    }

    #[test]
    fn test_decode_does_not_double_decode() {
        assert_eq!(decode_html("&amp;lt;"), "&lt;");
    }
}

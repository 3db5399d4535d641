use std::sync::LazyLock;

use regex::Regex;

/// Tag-like sequences: `<` followed by a name, `/`, `!` or `?`, up to the closing `>`.
/// Quoted attribute values are consumed whole, so a `>` inside one does not end the tag.
/// A bare `<` (as in "5 < 6") is left alone.
static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"</?[A-Za-z!?](?:[^<>"']|"[^"]*"|'[^']*')*>"#).expect("Invalid HTML tag regex")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

fn strip_tags(html: &str) -> String {
    let mut text = html.to_string();
    // Removing an inner tag can expose an outer one, e.g. `<<b>script>`.
    loop {
        let stripped = HTML_TAG_REGEX.replace_all(&text, "").into_owned();
        if stripped == text {
            return text;
        }
        text = stripped;
    }
}

/// Reduce provider-supplied HTML to plain text: tags removed, entities
/// decoded, whitespace collapsed.
pub fn html_to_text(html: &str) -> String {
    let without_tags = strip_tags(html);
    let decoded = html_escape::decode_html_entities(&without_tags);
    // Entity-encoded markup (`&lt;b&gt;`) only becomes a tag after decoding.
    let text = strip_tags(&decoded);
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_decodes_entities() {
        assert_eq!(
            html_to_text("<b>Spicy &amp; Sweet</b> tacos"),
            "Spicy & Sweet tacos"
        );
    }

    #[test]
    fn test_strips_tags_with_attributes() {
        assert_eq!(
            html_to_text(
                r#"Try <a href="https://example.com/x?a=1&b=2" target="_blank">this</a> one."#
            ),
            "Try this one."
        );
    }

    #[test]
    fn test_quoted_attribute_may_contain_angle_bracket() {
        assert_eq!(
            html_to_text(r#"Try <a title="a>b" href="x">this</a> one."#),
            "Try this one."
        );
        assert_eq!(html_to_text("<img alt='>' src=x>Tacos"), "Tacos");
        assert_eq!(
            html_to_text(r#"<span data-x="it's > 3" class='say "hi"'>Soup</span>"#),
            "Soup"
        );
    }

    #[test]
    fn test_strips_nested_and_encoded_tags() {
        assert_eq!(html_to_text("<<b>script>alert(1)</script>"), "alert(1)");
        assert_eq!(html_to_text("&lt;script&gt;x&lt;/script&gt;"), "x");
        assert_eq!(html_to_text("<!-- note -->kept<br/>"), "kept");
    }

    #[test]
    fn test_keeps_bare_angle_brackets() {
        assert_eq!(
            html_to_text("serves &lt; 4, ready in 5 &gt; minutes"),
            "serves < 4, ready in 5 > minutes"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(html_to_text("  one\n\n<p>two</p>&nbsp; three "), "one two three");
    }
}

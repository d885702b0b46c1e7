use super::Transform;
use crate::error::Result;
use crate::types::TransformMeta;

pub struct HtmlEntities;

// HTML input stream preprocessing: CR LF and lone CR become LF, NUL becomes U+FFFD.
fn normalize_input(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").replace('\0', "\u{fffd}")
}

impl Transform for HtmlEntities {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "htmlEntities",
            name: "HTML Entities",
            aliases: &["html", "entities"],
            is_reference: false,
            supports_decode_source: true,
            description: "Escapes & < > \" ' as entities; decodes any HTML character reference",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&#39;"),
                _ => result.push(c),
            }
        }
        Ok(result)
    }

    // Markup that is not a character reference is kept verbatim.
    fn decode(&self, text: &str) -> Result<String> {
        Ok(htmlize::unescape(normalize_input(text)).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_encode() {
        assert_eq!(
            HtmlEntities.encode(r#"<a href="x">Tom & Jerry's</a>"#).unwrap(),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(HtmlEntities.encode("Hello, World!").unwrap(), "Hello, World!");
    }

    #[test]
    fn test_html_encode_leaves_other_chars() {
        assert_eq!(HtmlEntities.encode("© é 世").unwrap(), "© é 世");
    }

    #[test]
    fn test_html_decode_inverse_of_encode() {
        assert_eq!(
            HtmlEntities.decode("&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;").unwrap(),
            r#"<b>"x" & 'y'</b>"#
        );
    }

    #[test]
    fn test_html_decode_named_and_numeric() {
        assert_eq!(HtmlEntities.decode("&copy; 2024").unwrap(), "© 2024");
        assert_eq!(HtmlEntities.decode("caf&eacute;").unwrap(), "café");
        assert_eq!(HtmlEntities.decode("&#65;&#x42;&#x43;").unwrap(), "ABC");
    }

    #[test]
    fn test_html_decode_legacy_without_semicolon() {
        assert_eq!(HtmlEntities.decode("&amp").unwrap(), "&");
        assert_eq!(HtmlEntities.decode("&copy 2024").unwrap(), "© 2024");
        assert_eq!(HtmlEntities.decode("&notit;").unwrap(), "¬it;");
        assert_eq!(HtmlEntities.decode("&#65").unwrap(), "A");
    }

    #[test]
    fn test_html_decode_numeric_c1_remap() {
        assert_eq!(HtmlEntities.decode("&#x80;").unwrap(), "€");
        assert_eq!(HtmlEntities.decode("&#x9F;").unwrap(), "Ÿ");
        assert_eq!(HtmlEntities.decode("&#150;").unwrap(), "–");
    }

    #[test]
    fn test_html_decode_invalid_code_points() {
        assert_eq!(HtmlEntities.decode("&#0;").unwrap(), "\u{fffd}");
        assert_eq!(HtmlEntities.decode("&#xD800;").unwrap(), "\u{fffd}");
        assert_eq!(HtmlEntities.decode("&#99999999;").unwrap(), "\u{fffd}");
    }

    #[test]
    fn test_html_decode_normalizes_line_endings() {
        assert_eq!(HtmlEntities.decode("a\r\nb").unwrap(), "a\nb");
        assert_eq!(HtmlEntities.decode("a\rb").unwrap(), "a\nb");
        assert_eq!(HtmlEntities.decode("a\0b").unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_html_decode_keeps_markup() {
        assert_eq!(HtmlEntities.decode("<b>bold</b>").unwrap(), "<b>bold</b>");
        assert_eq!(HtmlEntities.decode("a & b").unwrap(), "a & b");
    }
}

use super::Transform;
use crate::error::Result;
use crate::types::TransformMeta;

pub struct PlainText;

impl Transform for PlainText {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "text",
            name: "Plain Text",
            aliases: &["plain", "plaintext"],
            is_reference: true,
            supports_decode_source: true,
            description: "Canonical plain text every broadcast passes through",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn decode(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

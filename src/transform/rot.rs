use super::Transform;
use crate::error::Result;
use crate::types::TransformMeta;

pub struct Rot13;

fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => ((((c as u8 - b'A') + 13) % 26) + b'A') as char,
            'a'..='z' => ((((c as u8 - b'a') + 13) % 26) + b'a') as char,
            _ => c,
        })
        .collect()
}

impl Transform for Rot13 {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "rot13",
            name: "ROT13",
            aliases: &["rot-13"],
            is_reference: false,
            supports_decode_source: true,
            description: "ROT13 letter substitution (A-Z rotated by 13)",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        Ok(rot13(text))
    }

    fn decode(&self, text: &str) -> Result<String> {
        Ok(rot13(text))
    }
}

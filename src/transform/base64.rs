use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use super::{util, Transform};
use crate::error::{XlateError, Result};
use crate::types::TransformMeta;

const PLACEHOLDER: &str = "Invalid Base64";

// Padding optional, stray low bits in the final symbol ignored.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub struct Base64;

impl Transform for Base64 {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "base64",
            name: "Base64",
            aliases: &["b64"],
            is_reference: false,
            supports_decode_source: true,
            description: "RFC4648 Base64 of the UTF-8 bytes, padded",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        Ok(STANDARD.encode(text.as_bytes()))
    }

    fn decode(&self, text: &str) -> Result<String> {
        let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = FORGIVING
            .decode(cleaned.as_bytes())
            .map_err(|e| XlateError::invalid_encoding(PLACEHOLDER, e.to_string()))?;
        util::utf8_text(bytes, PLACEHOLDER)
    }
}

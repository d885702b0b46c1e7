use super::Transform;
use crate::error::{XlateError, Result};
use crate::types::TransformMeta;

const PLACEHOLDER: &str = "Invalid URL encoded text";

pub struct UrlEncode;

// URI-component unreserved set: left as-is by encode.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

impl Transform for UrlEncode {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "urlEncode",
            name: "URL Encode",
            aliases: &["url", "percent", "urlencoding"],
            is_reference: false,
            supports_decode_source: true,
            description: "URI component percent-encoding of UTF-8 bytes",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        for byte in text.bytes() {
            if is_unreserved(byte) {
                result.push(byte as char);
            } else {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
        Ok(result)
    }

    fn decode(&self, text: &str) -> Result<String> {
        let input = text.as_bytes();
        let mut bytes = Vec::with_capacity(input.len());
        let mut i = 0;

        while i < input.len() {
            if input[i] == b'%' {
                let hi = input.get(i + 1).copied().and_then(hex_value);
                let lo = input.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => bytes.push(hi << 4 | lo),
                    _ => {
                        return Err(XlateError::invalid_encoding(
                            PLACEHOLDER,
                            format!("malformed percent sequence at byte {}", i),
                        ))
                    }
                }
                i += 3;
            } else {
                bytes.push(input[i]);
                i += 1;
            }
        }

        String::from_utf8(bytes)
            .map_err(|_| XlateError::invalid_encoding(PLACEHOLDER, "percent sequences are not valid UTF-8"))
    }
}

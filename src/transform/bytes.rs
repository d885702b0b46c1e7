use super::{util, Transform};
use crate::error::Result;
use crate::types::TransformMeta;

pub struct Hex;

impl Transform for Hex {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "hex",
            name: "Hexadecimal",
            aliases: &["hexadecimal", "base16"],
            is_reference: false,
            supports_decode_source: true,
            description: "Two-digit lowercase hex per UTF-8 byte, space separated",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        Ok(util::join_bytes(text.as_bytes(), |b| format!("{:02x}", b)))
    }

    fn decode(&self, text: &str) -> Result<String> {
        let bytes = util::parse_byte_tokens(text, 16, "Invalid hex")?;
        util::utf8_text(bytes, "Invalid hex")
    }
}

pub struct Decimal;

impl Transform for Decimal {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "decimal",
            name: "Decimal (Bytes)",
            aliases: &["dec", "bytes"],
            is_reference: false,
            supports_decode_source: true,
            description: "Base-10 value per UTF-8 byte, space separated",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        Ok(util::join_bytes(text.as_bytes(), |b| b.to_string()))
    }

    fn decode(&self, text: &str) -> Result<String> {
        let bytes = util::parse_byte_tokens(text, 10, "Invalid decimal")?;
        util::utf8_text(bytes, "Invalid decimal")
    }
}

pub struct Binary;

impl Transform for Binary {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "binary",
            name: "Binary",
            aliases: &["bin", "base2"],
            is_reference: false,
            supports_decode_source: true,
            description: "Eight-digit binary per UTF-8 byte, space separated",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        Ok(util::join_bytes(text.as_bytes(), |b| format!("{:08b}", b)))
    }

    fn decode(&self, text: &str) -> Result<String> {
        let bytes = util::parse_byte_tokens(text, 2, "Invalid binary")?;
        util::utf8_text(bytes, "Invalid binary")
    }
}

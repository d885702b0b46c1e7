use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

use super::Transform;
use crate::error::{XlateError, Result};
use crate::types::TransformMeta;

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Digest lines in display order.
const ALGORITHMS: [(&str, fn(&[u8]) -> String); 5] = [
    ("MD5", hex_digest::<Md5>),
    ("SHA1", hex_digest::<Sha1>),
    ("SHA256", hex_digest::<Sha256>),
    ("SHA512", hex_digest::<Sha512>),
    ("RMD160", hex_digest::<Ripemd160>),
];

pub struct Hashes;

impl Transform for Hashes {
    fn meta(&self) -> TransformMeta {
        TransformMeta {
            id: "hashes",
            name: "Hashes",
            aliases: &["hash", "digest"],
            is_reference: false,
            supports_decode_source: false,
            description: "MD5, SHA-1, SHA-256, SHA-512 and RIPEMD-160 digests of the UTF-8 bytes",
        }
    }

    fn encode(&self, text: &str) -> Result<String> {
        let data = text.as_bytes();
        Ok(ALGORITHMS
            .iter()
            .map(|(label, digest)| format!("{}: {}", label, digest(data)))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn decode(&self, _text: &str) -> Result<String> {
        Err(XlateError::not_decode_source(self.id()))
    }
}

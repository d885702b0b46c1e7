mod base64;
mod bytes;
mod hashes;
mod html;
mod plain;
mod rot;
mod urlencoding;
pub mod registry;
pub(crate) mod util;

pub use self::base64::Base64;
pub use bytes::{Binary, Decimal, Hex};
pub use hashes::Hashes;
pub use html::HtmlEntities;
pub use plain::PlainText;
pub use registry::Registry;
pub use rot::Rot13;
pub use urlencoding::UrlEncode;

use crate::error::{Result, ENCODE_FAILED};
use crate::types::TransformMeta;

/// One registered text encoding.
///
/// `encode` takes canonical plain text, `decode` returns it. Both report
/// failure through [`XlateError`](crate::error::XlateError); the `*_text`
/// variants never fail. `encode_text` yields [`ENCODE_FAILED`] on error,
/// `decode_text` the transform's decode placeholder.
pub trait Transform: Send + Sync {
    fn meta(&self) -> TransformMeta;
    fn encode(&self, text: &str) -> Result<String>;
    fn decode(&self, text: &str) -> Result<String>;

    fn encode_text(&self, text: &str) -> String {
        self.encode(text).unwrap_or_else(|_| ENCODE_FAILED.to_string())
    }

    fn decode_text(&self, text: &str) -> String {
        self.decode(text).unwrap_or_else(|e| e.placeholder().to_string())
    }

    fn id(&self) -> &'static str {
        self.meta().id
    }

    fn is_reference(&self) -> bool {
        self.meta().is_reference
    }

    fn supports_decode_source(&self) -> bool {
        self.meta().supports_decode_source
    }
}

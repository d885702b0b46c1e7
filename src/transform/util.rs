use crate::error::{XlateError, Result};

const BOM: char = '\u{feff}';

/// Splits on runs of whitespace, ignoring leading and trailing whitespace.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// Parses a whitespace-separated list of byte values in `radix`.
///
/// Tokens must consist only of digits of the radix and fit in a byte.
pub fn parse_byte_tokens(input: &str, radix: u32, placeholder: &'static str) -> Result<Vec<u8>> {
    tokens(input)
        .map(|token| {
            if !token.chars().all(|c| c.is_digit(radix)) {
                return Err(XlateError::invalid_encoding(
                    placeholder,
                    format!("'{}' is not a base-{} number", token, radix),
                ));
            }
            u8::from_str_radix(token, radix).map_err(|_| {
                XlateError::invalid_encoding(placeholder, format!("'{}' does not fit in a byte", token))
            })
        })
        .collect()
}

/// Formats every byte with `f` and joins the results with single spaces.
pub fn join_bytes(bytes: &[u8], f: impl Fn(u8) -> String) -> String {
    bytes.iter().map(|&b| f(b)).collect::<Vec<_>>().join(" ")
}

/// Interprets decoded bytes as UTF-8 text, dropping a leading byte-order mark.
pub fn utf8_text(bytes: Vec<u8>, placeholder: &'static str) -> Result<String> {
    let text = String::from_utf8(bytes)
        .map_err(|e| XlateError::invalid_encoding(placeholder, format!("not valid UTF-8: {}", e)))?;
    match text.strip_prefix(BOM) {
        Some(rest) => Ok(rest.to_string()),
        None => Ok(text),
    }
}

use crate::io::{log, read_input};
use xlate::error::{Result, XlateError};
use xlate::types::{Context, DecodePolicy, InputSource};

/// Decodes to plain text under the context's decode policy.
///
/// Only the source transform runs; under `halt` a decode failure is an
/// error, otherwise its placeholder is the output.
pub fn run_decode(ctx: &Context, from: &str, input: &InputSource) -> Result<String> {
    let transform = ctx.registry.get(from)?;
    if !transform.supports_decode_source() {
        return Err(XlateError::not_decode_source(transform.id()));
    }

    let text = read_input(input, ctx.verbosity)?;
    match ctx.policy {
        DecodePolicy::Halt => transform.decode(&text),
        DecodePolicy::Propagate => {
            let decoded = transform.decode(&text);
            if decoded.is_err() {
                log::warn(format!("'{}' input did not decode", transform.id()), ctx.verbosity);
            }
            Ok(decoded.unwrap_or_else(|e| e.placeholder().to_string()))
        }
    }
}

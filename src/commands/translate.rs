use crate::io::{log, read_input};
use xlate::engine::{self, Broadcast};
use xlate::error::Result;
use xlate::types::{Context, InputSource};

pub fn run_translate(ctx: &Context, from: &str, input: &InputSource) -> Result<Broadcast> {
    let text = read_input(input, ctx.verbosity)?;
    log::debug(format!("broadcasting {} chars from '{}'", text.chars().count(), from), ctx.verbosity);

    let result = engine::broadcast_with(ctx.registry, from, &text, ctx.policy)?;
    if result.decode_failed {
        log::warn(
            format!("'{}' input did not decode, propagating \"{}\"", result.source, result.plain_text),
            ctx.verbosity,
        );
    }
    Ok(result)
}

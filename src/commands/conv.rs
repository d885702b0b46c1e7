use crate::io::{log, read_input};
use xlate::engine;
use xlate::error::Result;
use xlate::types::{Context, InputSource};

pub fn run_conv(ctx: &Context, from: &str, to: &str, input: &InputSource) -> Result<String> {
    let target = ctx.registry.get(to)?.id();
    let text = read_input(input, ctx.verbosity)?;
    let mut result = engine::broadcast_with(ctx.registry, from, &text, ctx.policy)?;
    if result.decode_failed {
        log::warn(format!("'{}' input did not decode", result.source), ctx.verbosity);
    }

    // Converting to the source itself leaves the text untouched.
    Ok(result.outputs.shift_remove(target).unwrap_or(text))
}

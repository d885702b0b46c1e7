use crate::io::{log, read_input};
use xlate::error::Result;
use xlate::types::{Context, InputSource};

pub fn run_encode(ctx: &Context, to: &str, input: &InputSource) -> Result<String> {
    let transform = ctx.registry.get(to)?;
    let text = read_input(input, ctx.verbosity)?;
    log::debug(format!("encoding {} bytes with '{}'", text.len(), transform.id()), ctx.verbosity);
    transform.encode(&text)
}

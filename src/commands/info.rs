use xlate::error::Result;
use xlate::types::{Context, TransformMeta};

pub fn run_info(ctx: &Context, id: &str) -> Result<TransformMeta> {
    let transform = ctx.registry.get(id)?;
    Ok(transform.meta())
}

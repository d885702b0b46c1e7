use xlate::types::{Context, TransformMeta};

pub fn run_list(ctx: &Context) -> Vec<TransformMeta> {
    ctx.registry.list()
}

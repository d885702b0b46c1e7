use indexmap::IndexMap;

use xlate::error::Result;
use xlate::session::Session;
use xlate::types::Context;

/// Field contents of a freshly started session, in catalog order.
pub fn run_show(ctx: &Context) -> Result<IndexMap<&'static str, String>> {
    let session = Session::with_policy(ctx.registry, ctx.policy)?;
    Ok(session
        .fields()
        .map(|(id, text)| (id, text.to_string()))
        .collect())
}

mod conv;
mod dec;
mod enc;
mod info;
mod list;
mod show;
mod translate;

pub use conv::run_conv;
pub use dec::run_decode;
pub use enc::run_encode;
pub use info::run_info;
pub use list::run_list;
pub use show::run_show;
pub use translate::run_translate;

use crate::io::write_output;
use xlate::error::Result;
use xlate::types::{Context, InputSource, OutputDest, TransformMeta};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

fn flags(meta: &TransformMeta) -> &'static str {
    if meta.is_reference {
        "reference"
    } else if !meta.supports_decode_source {
        "read-only"
    } else {
        "-"
    }
}

/// One `== Name (id) ==` block per field, separated by blank lines.
fn render_fields<'a>(ctx: &Context, fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<String> {
    let mut blocks = Vec::new();
    for (id, text) in fields {
        let meta = ctx.registry.get(id)?.meta();
        let header = match flags(&meta) {
            "-" => format!("== {} ({}) ==", meta.name, meta.id),
            flag => format!("== {} ({}) [{}] ==", meta.name, meta.id, flag),
        };
        blocks.push(format!("{}\n{}", header, text));
    }
    Ok(blocks.join("\n\n"))
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let transforms = run_list(ctx);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&transforms)?);
        } else {
            println!("{:<14} {:<17} {:<10} DESCRIPTION", "ID", "NAME", "FLAGS");
            println!("{}", "-".repeat(72));
            for t in transforms {
                println!("{:<14} {:<17} {:<10} {}", t.id, t.name, flags(&t), t.description);
            }
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub id: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.id)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&meta)?);
        } else {
            println!("Id:          {}", meta.id);
            println!("Name:        {}", meta.name);
            println!("Aliases:     {}", meta.aliases.join(", "));
            println!("Reference:   {}", if meta.is_reference { "yes" } else { "no" });
            println!("Decodable:   {}", if meta.supports_decode_source { "yes" } else { "no" });
            println!("Description: {}", meta.description);
        }
        Ok(())
    }
}

pub struct TranslateCommand {
    pub from: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub json: bool,
}

impl CommandHandler for TranslateCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_translate(ctx, &self.from, &self.input)?;
        let rendered = if self.json {
            serde_json::to_string_pretty(&result)?
        } else {
            render_fields(ctx, result.outputs.iter().map(|(id, text)| (*id, text.as_str())))?
        };
        write_output(&rendered, &self.output)
    }
}

pub struct EncCommand {
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let encoded = run_encode(ctx, &self.to, &self.input)?;
        write_output(&encoded, &self.output)
    }
}

pub struct DecCommand {
    pub from: String,
    pub input: InputSource,
    pub output: OutputDest,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let decoded = run_decode(ctx, &self.from, &self.input)?;
        write_output(&decoded, &self.output)
    }
}

pub struct ConvCommand {
    pub from: String,
    pub to: String,
    pub input: InputSource,
    pub output: OutputDest,
}

impl CommandHandler for ConvCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let converted = run_conv(ctx, &self.from, &self.to, &self.input)?;
        write_output(&converted, &self.output)
    }
}

pub struct ShowCommand {
    pub json: bool,
}

impl CommandHandler for ShowCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let fields = run_show(ctx)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&fields)?);
        } else {
            println!("{}", render_fields(ctx, fields.iter().map(|(id, text)| (*id, text.as_str())))?);
        }
        Ok(())
    }
}

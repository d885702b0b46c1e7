use clap::{Parser, Subcommand, ValueEnum};

use crate::types::DecodePolicy;

#[derive(Parser)]
#[command(name = "xlate")]
#[command(about = "Translate text between URL, Base64, hex, decimal, binary, HTML entity and ROT13 forms")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Print diagnostic messages to stderr")]
    pub debug: bool,

    #[arg(long, short = 'q', global = true, help = "Suppress warnings")]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        default_value = "propagate",
        help = "What to do when the source text fails to decode"
    )]
    pub on_decode_error: PolicyArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "List transforms in catalog order")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show transform details")]
    Info {
        id: String,

        #[arg(long)]
        json: bool,
    },

    #[command(about = "Decode text from one transform and re-encode it into all others")]
    Translate {
        #[arg(long, default_value = "text")]
        from: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Encode plain text with one transform")]
    Enc {
        #[arg(long)]
        to: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,
    },

    #[command(about = "Decode text from one transform to plain text")]
    Dec {
        #[arg(long)]
        from: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,
    },

    #[command(about = "Convert between two transforms")]
    Conv {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,
    },

    #[command(about = "Show every field of a fresh session")]
    Show {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Propagate,
    Halt,
}

impl From<PolicyArg> for DecodePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Propagate => DecodePolicy::Propagate,
            PolicyArg::Halt => DecodePolicy::Halt,
        }
    }
}

mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};
use commands::CommandHandler;
use xlate::{error, types, Context, Registry};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            io::log::error(&e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::new(
        Registry::global(),
        types::Verbosity::from_flags(cli.quiet, cli.debug),
        cli.on_decode_error.into(),
    );

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { id, json } => Box::new(commands::InfoCommand { id, json }),

        Command::Translate { from, r#in, out, json } => Box::new(commands::TranslateCommand {
            from,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            json,
        }),

        Command::Enc { to, r#in, out } => Box::new(commands::EncCommand {
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
        }),

        Command::Dec { from, r#in, out } => Box::new(commands::DecCommand {
            from,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
        }),

        Command::Conv { from, to, r#in, out } => Box::new(commands::ConvCommand {
            from,
            to,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
        }),

        Command::Show { json } => Box::new(commands::ShowCommand { json }),
    };

    handler.execute(&ctx)
}

//! Polylex CLI entry point.

use clap::{CommandFactory, Parser};

use polylex::cli::{Command, PolylexCli};
use polylex::commands::{self, Options};
use polylex::config::{resolve_config_path, Settings};

fn run(args: PolylexCli) -> anyhow::Result<i32> {
    let cfg_path = resolve_config_path(&args.config);
    let settings = Settings::load(cfg_path.as_deref())?;
    if args.no_color || !settings.color {
        colored::control::set_override(false);
    }
    polylex::debug_log!("[config] {:?} -> {:?}", cfg_path, settings);

    let opts = Options {
        settings,
        lang: args.lang,
        pretty_errors: args.pretty_errors,
    };

    match args.cmd {
        Some(Command::Analyze {
            input,
            json,
            out,
            watch,
        }) => commands::analyze::main(input, json, out, watch, &opts).map(|_| 0),
        Some(Command::Tokens { input }) => commands::tokens::main(input, &opts).map(|_| 0),
        Some(Command::Errors { input }) => commands::errors::main(input, &opts),
        Some(Command::Stats { input }) => commands::stats::main(input, &opts).map(|_| 0),
        Some(Command::Frequency { input, top }) => {
            commands::frequency::main(input, top, &opts).map(|_| 0)
        }
        Some(Command::Graph { input, format }) => {
            commands::graph::main(input, format, &opts).map(|_| 0)
        }
        Some(Command::Lint { input }) => commands::lint::main(input, &opts).map(|_| 0),
        Some(Command::Languages) => commands::languages::main().map(|_| 0),
        None => {
            PolylexCli::command().print_help()?;
            println!();
            Ok(2)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = PolylexCli::parse();
    let code = run(args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::language::LanguageId;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    #[default]
    Dot,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "polylex",
    about = "Polylex: lexical analysis for Java, Python and C++ sources",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct PolylexCli {
    /// Global: pretty diagnostics with source excerpts
    #[arg(long = "pretty-errors", action = ArgAction::SetTrue, global = true)]
    pub pretty_errors: bool,

    /// Global: language profile (otherwise inferred from the file extension)
    #[arg(long = "lang", short = 'l', value_enum, global = true)]
    pub lang: Option<LanguageId>,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    /// Global: path to config (TOML); default: ~/.polylex/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full report: tokens, errors and statistics
    ///
    /// Examples:
    ///   polylex analyze Main.java
    ///   polylex analyze script.py --json -o report.json
    Analyze {
        /// Input file ("-" reads stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Emit JSON instead of tables
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,

        /// Write the report to FILE instead of stdout
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Watch input for changes and re-run the analysis when modified
        #[arg(long = "watch", action = ArgAction::SetTrue)]
        watch: bool,
    },

    /// Token table (kind, text, line, column)
    Tokens {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Error records with positions and suggestions; exits with 1 when any exist
    Errors {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Token counters and kind distribution
    Stats {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Most frequent keywords, identifiers, operators and literals
    Frequency {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Rows per category (default from config)
        #[arg(long = "top", value_name = "N")]
        top: Option<usize>,
    },

    /// Token-kind transition graph
    Graph {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(long = "format", value_enum, default_value_t = GraphFormat::Dot)]
        format: GraphFormat,
    },

    /// Identifiers that look like misspelled keywords
    Lint {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Supported language profiles
    Languages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_lang_after_subcommand() {
        let cli = PolylexCli::parse_from(["polylex", "tokens", "a.txt", "--lang", "c++"]);
        assert_eq!(cli.lang, Some(LanguageId::Cpp));
        assert!(matches!(cli.cmd, Some(Command::Tokens { .. })));
    }

    #[test]
    fn graph_defaults_to_dot() {
        let cli = PolylexCli::parse_from(["polylex", "graph", "x.py"]);
        match cli.cmd {
            Some(Command::Graph { format, .. }) => assert_eq!(format, GraphFormat::Dot),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        PolylexCli::command().debug_assert();
    }
}

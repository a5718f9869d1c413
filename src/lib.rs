//! Polylex: a table-driven lexical scanner for Java, Python and C++ sources.
//!
//! The library half holds the scanner (`core`), the CLI definition and the
//! subcommands so integration tests can reach them via `polylex::...`.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::analysis::{analyze, AnalysisResult};
pub use crate::core::language::LanguageId;
pub use crate::core::token::{Token, TokenKind};

//! Scanner core: language profiles, the rule pass, the token pass and the
//! reductions built on their output.

#[macro_use]
pub mod debug; // gated debug logging (POLYLEX_DEBUG=1) provides debug_log! macro

pub mod analysis;
pub mod cursor;
pub mod diagnostics;
pub mod error;
pub mod error_scanner;
pub mod frequency;
pub mod graph;
pub mod hints;
pub mod language;
pub mod lexer;
pub mod rules;
pub mod stats;
pub mod token;

pub use analysis::{analyze, AnalysisResult};
pub use language::LanguageId;
pub use token::{Token, TokenKind};

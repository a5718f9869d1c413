//! Subcommand implementations. Each `main` prints to stdout and returns an exit code
//! where the command has one.

pub mod analyze;
pub mod errors;
pub mod frequency;
pub mod graph;
pub mod languages;
pub mod lint;
pub mod render;
pub mod stats;
pub mod tokens;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::core::analysis::{analyze, AnalysisResult};
use crate::core::diagnostics::{print_error, Span};
use crate::core::error::{CoreError, ErrorRecord};
use crate::core::language::LanguageId;
use crate::core::token::Token;

/// Flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Options {
    pub settings: Settings,
    pub lang: Option<LanguageId>,
    pub pretty_errors: bool,
}

pub struct Source {
    pub name: String,
    pub text: String,
    pub language: LanguageId,
}

impl Source {
    pub fn analyze(&self) -> AnalysisResult {
        analyze(&self.text, self.language)
    }
}

pub fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

/// `--lang`, then the file extension, then `default_language` from config.
pub fn resolve_language(input: &Path, opts: &Options) -> Result<LanguageId> {
    if let Some(lang) = opts.lang {
        return Ok(lang);
    }
    let by_ext = input
        .extension()
        .and_then(|e| e.to_str())
        .and_then(LanguageId::from_extension);
    if let Some(lang) = by_ext.or(opts.settings.default_language) {
        return Ok(lang);
    }
    Err(CoreError::UndetectedLanguage(input.display().to_string()).into())
}

pub fn load_source(input: &Path, opts: &Options) -> Result<Source> {
    let language = resolve_language(input, opts)?;
    let (name, text) = if is_stdin(input) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        ("<stdin>".to_string(), buf)
    } else {
        let text = fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        (input.display().to_string(), text)
    };
    crate::debug_log!("[input] {} ({} bytes) as {}", name, text.len(), language);
    Ok(Source { name, text, language })
}

pub fn report_errors(source: &Source, errors: &[ErrorRecord], tokens: &[Token], pretty: bool) {
    if pretty {
        for rec in errors {
            print_error(&source.name, &source.text, rec, Span::for_record(rec, tokens));
        }
    } else {
        print!("{}", render::error_list(errors));
    }
}

/// Path form of `input` for watch loops; stdin cannot be watched.
pub fn watch_target(input: &Path) -> Result<PathBuf> {
    if is_stdin(input) {
        anyhow::bail!("--watch needs a file path, not stdin");
    }
    Ok(input.to_path_buf())
}

// src/core/diagnostics.rs
//! Pretty, colored, file+line diagnostics for error records.

use colored::Colorize;

use crate::core::error::{ErrorOrigin, ErrorRecord};
use crate::core::token::Token;

pub struct Span {
    pub line: usize,
    pub col: usize,
    pub len: usize, // underline length (use 1 if unknown)
}

impl Span {
    pub fn single(line: usize, col: usize) -> Self {
        Self { line, col, len: 1 }
    }

    /// Underlines the error token reported at the record's position, if any.
    pub fn for_record(rec: &ErrorRecord, tokens: &[Token]) -> Self {
        let len = match rec.origin {
            ErrorOrigin::Scan => tokens
                .iter()
                .find(|t| t.line == rec.line && t.column == rec.column)
                .map(|t| t.text.lines().next().unwrap_or("").chars().count())
                .unwrap_or(1),
            ErrorOrigin::Rule => 1,
        };
        Self { line: rec.line, col: rec.column, len }
    }
}

pub fn render_error(filename: &str, source: &str, rec: &ErrorRecord, span: Span) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {}\n",
        "error:".bright_red().bold(),
        rec.message.bright_white(),
        format!("[{}]", rec.kind).dimmed()
    ));
    let (ln, col) = (span.line, span.col);
    let line_text = nth_line(source, ln).unwrap_or_default();

    // line number gutter
    let ln_str = format!("{:>4}", ln);
    out.push_str(&format!(
        "{} {}\n",
        "-->".bright_blue(),
        format!("{}:{}:{}", filename, ln, col).bright_white()
    ));
    out.push_str(&format!(" {} {}\n", ln_str.dimmed(), "|".dimmed()));
    out.push_str(&format!("{} {} {}\n", ln_str.dimmed(), "|".dimmed(), line_text));

    // underline with ^^^^^
    let underline = " ".repeat(col.saturating_sub(1)) + &"^".repeat(span.len.max(1));
    out.push_str(&format!(
        " {} {} {}\n",
        " ".repeat(ln_str.len()).dimmed(),
        "|".dimmed(),
        underline.bright_red()
    ));
    out.push_str(&format!("{} {}\n", "help:".bright_green().bold(), rec.suggestion));
    out
}

pub fn print_error(filename: &str, source: &str, rec: &ErrorRecord, span: Span) {
    eprintln!("{}", render_error(filename, source, rec, span));
}

fn nth_line(src: &str, n: usize) -> Option<String> {
    src.lines().nth(n.saturating_sub(1)).map(|s| s.to_string())
}

use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::{load_source, render, report_errors, watch_target, Options, Source};
use crate::core::analysis::AnalysisResult;
use crate::io::atomic::atomic_write;

const WATCH_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    generated_at: String,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

pub fn json_report(source: &Source, result: &AnalysisResult) -> Result<String> {
    let report = JsonReport {
        file: &source.name,
        generated_at: chrono::Local::now().to_rfc3339(),
        result,
    };
    serde_json::to_string_pretty(&report).context("serializing report")
}

fn header(source: &Source) -> String {
    format!(
        "Lexical analysis of {} ({})\n\n",
        source.name,
        source.language.display_name()
    )
}

fn tokens_section(result: &AnalysisResult, value_width: usize) -> String {
    format!("== Tokens ==\n{}", render::token_table(&result.tokens, value_width))
}

fn stats_section(result: &AnalysisResult) -> String {
    format!("\n== Statistics ==\n{}", render::stats_report(&result.stats))
}

pub fn text_report(source: &Source, result: &AnalysisResult, value_width: usize) -> String {
    let mut out = header(source);
    out.push_str(&tokens_section(result, value_width));
    out.push_str("\n== Errors ==\n");
    out.push_str(&render::error_list(&result.errors));
    out.push_str(&stats_section(result));
    out
}

fn run_once(input: &Path, json: bool, out: Option<&Path>, opts: &Options) -> Result<()> {
    let source = load_source(input, opts)?;
    let result = source.analyze();

    if json || out.is_some() {
        let body = if json {
            json_report(&source, &result)?
        } else {
            text_report(&source, &result, opts.settings.value_width)
        };
        match out {
            Some(path) => {
                atomic_write(path, body.as_bytes())
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("{} {}", "wrote".bright_green(), path.display());
            }
            None => println!("{body}"),
        }
        return Ok(());
    }

    print!("{}", header(&source));
    print!("{}", tokens_section(&result, opts.settings.value_width));
    println!("\n== Errors ==");
    report_errors(&source, &result.errors, &result.tokens, opts.pretty_errors);
    print!("{}", stats_section(&result));

    let summary = format!(
        "{} tokens, {} errors",
        result.stats.total_tokens, result.stats.errors
    );
    if result.errors.is_empty() {
        eprintln!("{} {}", "ok:".bright_green().bold(), summary);
    } else {
        eprintln!("{} {}", "warn:".yellow().bold(), summary);
    }
    Ok(())
}

fn modified(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

pub fn main(input: PathBuf, json: bool, out: Option<PathBuf>, watch: bool, opts: &Options) -> Result<()> {
    if !watch {
        return run_once(&input, json, out.as_deref(), opts);
    }
    let target = watch_target(&input)?;
    let mut last_mtime = modified(&target);
    if let Err(e) = run_once(&target, json, out.as_deref(), opts) {
        eprintln!("{} {:#}", "error:".bright_red(), e);
    }
    loop {
        sleep(WATCH_INTERVAL);
        let m = modified(&target);
        if m > last_mtime {
            last_mtime = m;
            println!("[watch] detected change, re-analyzing...");
            if let Err(e) = run_once(&target, json, out.as_deref(), opts) {
                eprintln!("{} {:#}", "error:".bright_red(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::LanguageId;

    fn source(text: &str) -> Source {
        Source {
            name: "demo.py".into(),
            text: text.into(),
            language: LanguageId::Python,
        }
    }

    #[test]
    fn json_report_carries_file_and_timestamp() {
        let src = source("x = 1");
        let result = src.analyze();
        let body = json_report(&src, &result).unwrap();
        let v: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(v["file"], "demo.py");
        assert_eq!(v["language"], "python");
        assert!(v["generated_at"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(v["tokens"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["tokens"][2]["kind"], "literal-number");
        assert_eq!(v["stats"]["total_tokens"], 3);
    }

    #[test]
    fn text_report_has_all_sections() {
        let src = source("x = 1");
        let body = text_report(&src, &src.analyze(), 25);
        assert!(body.starts_with("Lexical analysis of demo.py (Python)"));
        for section in ["== Tokens ==", "== Errors ==", "No errors found", "== Statistics =="] {
            assert!(body.contains(section), "{section} missing in {body}");
        }
    }
}

use std::path::PathBuf;

use super::{load_source, report_errors, Options};

/// Returns 1 when the input has any error record, 0 otherwise.
pub fn main(input: PathBuf, opts: &Options) -> anyhow::Result<i32> {
    let source = load_source(&input, opts)?;
    let result = source.analyze();
    report_errors(&source, &result.errors, &result.tokens, opts.pretty_errors);
    Ok(if result.errors.is_empty() { 0 } else { 1 })
}

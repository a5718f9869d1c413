use std::path::PathBuf;

use super::{load_source, render, Options};
use crate::core::frequency::FrequencyReport;

pub fn main(input: PathBuf, top: Option<usize>, opts: &Options) -> anyhow::Result<()> {
    let source = load_source(&input, opts)?;
    let result = source.analyze();
    let report = FrequencyReport::collect(&result.tokens);
    print!("{}", render::frequency_report(&report, top.unwrap_or(opts.settings.top)));
    Ok(())
}

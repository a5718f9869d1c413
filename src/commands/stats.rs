use std::path::PathBuf;

use super::{load_source, render, Options};

pub fn main(input: PathBuf, opts: &Options) -> anyhow::Result<()> {
    let source = load_source(&input, opts)?;
    let result = source.analyze();
    println!("{} ({})", source.name, source.language.display_name());
    print!("{}", render::stats_report(&result.stats));
    Ok(())
}

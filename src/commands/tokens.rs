use std::path::PathBuf;

use super::{load_source, render, Options};

pub fn main(input: PathBuf, opts: &Options) -> anyhow::Result<()> {
    let source = load_source(&input, opts)?;
    let result = source.analyze();
    print!("{}", render::token_table(&result.tokens, opts.settings.value_width));
    Ok(())
}

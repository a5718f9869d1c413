use std::path::PathBuf;

use super::{load_source, render, Options};
use crate::core::hints::keyword_typos;

pub fn main(input: PathBuf, opts: &Options) -> anyhow::Result<()> {
    let source = load_source(&input, opts)?;
    let result = source.analyze();
    let hints = keyword_typos(&result.tokens, source.language.profile());
    print!("{}", render::hint_list(&hints));
    Ok(())
}

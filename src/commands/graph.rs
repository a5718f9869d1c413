use std::path::PathBuf;

use anyhow::Context;

use super::{load_source, Options};
use crate::cli::GraphFormat;
use crate::core::graph::TransitionGraph;

pub fn main(input: PathBuf, format: GraphFormat, opts: &Options) -> anyhow::Result<()> {
    let source = load_source(&input, opts)?;
    let result = source.analyze();
    let graph = TransitionGraph::build(&result.tokens);
    match format {
        GraphFormat::Dot => print!("{}", graph.to_dot()),
        GraphFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&graph).context("serializing graph")?
        ),
    }
    Ok(())
}

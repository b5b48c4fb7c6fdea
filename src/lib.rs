pub mod cli;
pub mod config;
pub mod core;
pub mod fs;
pub mod models;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;

use crate::cli::Cli;
use crate::config::TreeConfig;
use crate::core::TreePrinter;
use crate::fs::RealFileSystem;

/// Print the tree described by `cli` to standard output or to `--output`.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = cli.root();
    let options = cli.tree_options();
    let config = TreeConfig::builtin();
    let fs = RealFileSystem;

    // Measure before the output file exists so it cannot widen the column.
    let max_name_len = core::annotation_width(&fs, &root, &config, &options).await?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing tree to file");
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    TreePrinter::new(&fs, &root, &config, &options, max_name_len)
        .print(&mut out)
        .await?;
    out.flush().context("cannot flush output")?;
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

use crate::core::TreeOptions;

#[derive(Parser, Debug)]
#[command(name = "annotree", version)]
#[command(about = "Print a project's directory tree with annotated key files", long_about = None)]
pub struct Cli {
    /// Root directory to print (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Ignore build and IDE metadata directories (build, .gradle, .idea)
    #[arg(long)]
    pub ignore_temp: bool,

    /// Descend at most DEPTH levels below the root (the root is level 0)
    #[arg(long, value_name = "DEPTH", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Do not print annotations
    #[arg(long)]
    pub no_annotations: bool,

    /// Write the tree to FILE instead of standard output, replacing its contents
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn root(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            max_depth: self.max_depth,
            ignore_temp: self.ignore_temp,
            show_annotations: !self.no_annotations,
        }
    }
}

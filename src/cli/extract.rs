//! Extract command: run the pipeline over a literal title and body

use crate::loader::try_extract;
use crate::models::Issue;
use crate::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Issue title
    #[arg(short, long)]
    pub title: String,

    /// Issue body (markdown)
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the issue body from a file ("-" for stdin)
    #[arg(short = 'f', long)]
    pub body_file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

pub fn run(args: ExtractArgs, tag: &str) -> Result<bool> {
    let body = match (args.body, args.body_file) {
        (Some(body), _) => body,
        (None, Some(path)) => read_body(&path)?,
        (None, None) => String::new(),
    };

    let issue = Issue::new(args.title, body);
    super::report(&try_extract(&issue, tag), args.json)
}

fn read_body(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read body from stdin");
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read body file '{}'", path.display()))
}

//! Issue command: load an issue from disk and extract it

use crate::loader::{FileIssueSource, MerchantDetailsLoader};
use crate::models::LoaderConfig;
use crate::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Issue number
    pub id: u64,

    /// Directory containing `<id>.json` issue files
    #[arg(short = 'd', long)]
    pub issues_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}

pub async fn run(args: IssueArgs, config: &LoaderConfig, project_root: &Path) -> Result<bool> {
    let issues_dir = args
        .issues_dir
        .unwrap_or_else(|| config.issues_dir_in(project_root));
    tracing::debug!(dir = %issues_dir.display(), id = args.id, "Loading issue");

    let loader = MerchantDetailsLoader::from_config(FileIssueSource::new(issues_dir), config);
    let extraction = loader.load(args.id).await?;
    super::report(&extraction, args.json)
}

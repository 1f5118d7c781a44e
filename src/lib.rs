// Merchant Loader - Listing request extraction
// Turns "add my shop" issue submissions into typed merchant details

pub mod cli;
pub mod loader;
pub mod models;
pub mod parser;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use loader::{
    extract, try_extract, Absence, Extraction, FileIssueSource, IssueSource,
    MerchantDetailsLoader, SourceError, StaticIssueSource, DEFAULT_BLOCK_TAG,
};
pub use models::{Issue, LoaderConfig, MerchantDetails};

//! Merchant details loader
//!
//! Runs the extraction pipeline over an issue:
//!
//! 1. Name and category from the title
//! 2. The details block from the body
//! 3. Details block lines onto the record
//!
//! Steps 1 and 2 abort the whole extraction when they find nothing. Step 3
//! never aborts; bad lines are dropped one at a time.

pub mod source;

pub use source::{FileIssueSource, IssueSource, SourceError, StaticIssueSource};

use crate::models::{Issue, LoaderConfig, MerchantDetails};
use crate::parser::{fenced_blocks, find_tagged_block, normalize_content, parse_block, parse_title};

/// Fence info string used by the listing request template
pub const DEFAULT_BLOCK_TAG: &str = "yml";

/// Why an issue produced no merchant details
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Absence {
    #[error("Title does not contain exactly two quoted segments (name and category)")]
    TitleFormat,

    #[error("Body has no fenced block tagged '{tag}'")]
    MissingBlock {
        tag: String,
        /// Info strings of the fenced blocks that were present
        found: Vec<String>,
    },
}

/// Outcome of running the pipeline over one issue
pub type Extraction = Result<MerchantDetails, Absence>;

/// Extract merchant details, reporting why when there are none
pub fn try_extract(issue: &Issue, tag: &str) -> Extraction {
    let title = parse_title(&issue.title).ok_or(Absence::TitleFormat)?;
    tracing::debug!(
        title = %issue.title,
        name = %title.name,
        category = %title.category,
        "Extracted name and category from title"
    );

    let body = normalize_content(&issue.body);
    let block = find_tagged_block(&body, tag).ok_or_else(|| Absence::MissingBlock {
        tag: tag.to_string(),
        found: fenced_blocks(&body).into_iter().map(|b| b.info).collect(),
    })?;

    let mut details = MerchantDetails {
        name: title.name,
        category: title.category,
        ..Default::default()
    };
    let summary = parse_block(&block, &mut details);
    tracing::debug!(
        applied = summary.applied,
        ignored = summary.ignored_keys.len(),
        skipped = summary.skipped.len(),
        "Parsed details block"
    );

    Ok(details)
}

/// Extract merchant details, or `None` if the issue doesn't follow the template
pub fn extract(issue: &Issue, tag: &str) -> Option<MerchantDetails> {
    try_extract(issue, tag).ok()
}

/// Fetches issues from a source and extracts merchant details from them
#[derive(Debug, Clone)]
pub struct MerchantDetailsLoader<S> {
    source: S,
    block_tag: String,
}

impl<S: IssueSource> MerchantDetailsLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            block_tag: DEFAULT_BLOCK_TAG.to_string(),
        }
    }

    pub fn from_config(source: S, config: &LoaderConfig) -> Self {
        Self::new(source).with_block_tag(config.block_tag.clone())
    }

    pub fn with_block_tag(mut self, tag: impl Into<String>) -> Self {
        self.block_tag = tag.into();
        self
    }

    pub fn block_tag(&self) -> &str {
        &self.block_tag
    }

    /// Fetch issue `id` and run the pipeline over it
    ///
    /// Failing to fetch is an error. An issue that doesn't follow the
    /// template is `Ok(Err(absence))`.
    pub async fn load(&self, id: u64) -> Result<Extraction, SourceError> {
        let issue = self.source.fetch_issue(id).await?;
        let extraction = try_extract(&issue, &self.block_tag);
        if let Err(ref absence) = extraction {
            tracing::info!(issue = id, %absence, "No merchant details in issue");
        }
        Ok(extraction)
    }

    /// Fetch issue `id` and extract its merchant details, if any
    pub async fn extract_details(
        &self,
        id: u64,
    ) -> Result<Option<MerchantDetails>, SourceError> {
        Ok(self.load(id).await?.ok())
    }
}

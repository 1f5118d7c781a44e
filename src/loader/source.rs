//! Issue sources
//!
//! Where raw issues come from is outside the loader's concern. Anything that
//! can hand back a title and body for an issue number implements
//! [`IssueSource`].

use crate::models::Issue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Errors that can occur while fetching an issue
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Issue #{0} not found")]
    NotFound(u64),

    #[error("Failed to read issue file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse issue file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Something that can retrieve a raw issue by number
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch the title and body of issue `id`
    async fn fetch_issue(&self, id: u64) -> Result<Issue, SourceError>;
}

/// Reads issues from `<dir>/<id>.json`
///
/// Each file holds `{"title": "...", "body": "..."}`, the shape an issue
/// export from a tracker API usually has.
#[derive(Debug, Clone)]
pub struct FileIssueSource {
    dir: PathBuf,
}

impl FileIssueSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing issue `id`
    pub fn issue_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

#[async_trait]
impl IssueSource for FileIssueSource {
    async fn fetch_issue(&self, id: u64) -> Result<Issue, SourceError> {
        let path = self.issue_path(id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(SourceError::NotFound(id)),
            Err(source) => return Err(SourceError::Read { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| SourceError::Parse { path, source })
    }
}

/// In-memory issues keyed by number
#[derive(Debug, Clone, Default)]
pub struct StaticIssueSource {
    issues: HashMap<u64, Issue>,
}

impl StaticIssueSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, id: u64, issue: Issue) -> Self {
        self.insert(id, issue);
        self
    }

    pub fn insert(&mut self, id: u64, issue: Issue) {
        self.issues.insert(id, issue);
    }
}

#[async_trait]
impl IssueSource for StaticIssueSource {
    async fn fetch_issue(&self, id: u64) -> Result<Issue, SourceError> {
        self.issues.get(&id).cloned().ok_or(SourceError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_source_reads_issue() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("42.json"),
            r#"{"title": "Add \"A\" \"B\"", "body": "text", "number": 42}"#,
        )
        .unwrap();

        let source = FileIssueSource::new(temp.path());
        let issue = source.fetch_issue(42).await.unwrap();
        assert_eq!(issue, Issue::new("Add \"A\" \"B\"", "text"));
    }

    #[tokio::test]
    async fn test_file_source_missing_issue() {
        let temp = TempDir::new().unwrap();
        let source = FileIssueSource::new(temp.path());

        let err = source.fetch_issue(7).await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_file_source_invalid_json() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("3.json"), "not json").unwrap();

        let source = FileIssueSource::new(temp.path());
        let err = source.fetch_issue(3).await.unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains("3.json"));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticIssueSource::new().with_issue(1, Issue::new("t", "b"));

        assert_eq!(source.fetch_issue(1).await.unwrap().title, "t");
        assert!(matches!(
            source.fetch_issue(2).await,
            Err(SourceError::NotFound(2))
        ));
    }
}

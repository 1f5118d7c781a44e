//! Fenced code block locator (AST-based)
//!
//! Walks the pulldown-cmark event stream instead of scanning for backticks, so
//! fences inside other code blocks or indented code are never mistaken for
//! the details block.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// A fenced code block and its info string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Info string after the opening fence (e.g. "yml", "rust", "")
    pub info: String,
    /// Raw block content
    pub content: String,
}

/// Normalize content: strip BOM, normalize line endings
///
/// Handles:
/// - UTF-8 BOM (U+FEFF)
/// - CRLF → LF
/// - CR → LF
pub fn normalize_content(content: &str) -> String {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Return the content of the first fenced block whose info string is `tag`
///
/// Matching is exact: `yml` does not match `yaml`, `YML` or `yml {.x}`.
/// Leading and trailing newlines are trimmed from the content.
///
/// # Example
/// ```
/// use merchant_loader::parser::find_tagged_block;
/// let body = "Details:\n\n```yml\n- btc: true\n```\n";
/// assert_eq!(find_tagged_block(body, "yml").as_deref(), Some("- btc: true"));
/// assert_eq!(find_tagged_block(body, "yaml"), None);
/// ```
pub fn find_tagged_block(markdown: &str, tag: &str) -> Option<String> {
    let mut current: Option<String> = None;

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) if &*info == tag => {
                current = Some(String::new());
            }
            Event::Text(text) => {
                if let Some(ref mut content) = current {
                    content.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(content) = current.take() {
                    return Some(content.trim_matches('\n').to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Extract every fenced code block in document order
pub fn fenced_blocks(markdown: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<FencedBlock> = None;

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                current = Some(FencedBlock {
                    info: info.to_string(),
                    content: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(ref mut block) = current {
                    block.content.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"# Listing request

Some text here.

```rust
let x = "```yml";
```

```yml
- url: https://first.example
- btc: true
```

```yml
- url: https://second.example
```
"#;

    #[test]
    fn test_find_first_matching_block() {
        let block = find_tagged_block(BODY, "yml").unwrap();
        assert_eq!(block, "- url: https://first.example\n- btc: true");
    }

    #[test]
    fn test_find_other_tag() {
        let block = find_tagged_block(BODY, "rust").unwrap();
        assert_eq!(block, r#"let x = "```yml";"#);
    }

    #[test]
    fn test_tag_must_match_exactly() {
        let body = "```yaml\nbtc: true\n```\n\n```YML\nbtc: true\n```\n\n```yml {.data}\nbtc: true\n```\n";
        assert_eq!(find_tagged_block(body, "yml"), None);
    }

    #[test]
    fn test_no_fenced_blocks() {
        assert_eq!(find_tagged_block("Just prose, no code.", "yml"), None);
        assert_eq!(find_tagged_block("", "yml"), None);
    }

    #[test]
    fn test_indented_code_is_not_fenced() {
        let body = "Intro\n\n    yml\n    btc: true\n";
        assert_eq!(find_tagged_block(body, "yml"), None);
        assert!(fenced_blocks(body).is_empty());
    }

    #[test]
    fn test_tilde_fence() {
        let body = "~~~yml\nbtc: true\n~~~\n";
        assert_eq!(find_tagged_block(body, "yml").as_deref(), Some("btc: true"));
    }

    #[test]
    fn test_trims_surrounding_newlines_only() {
        let body = "```yml\n\n  - btc: true  \n\n```\n";
        assert_eq!(
            find_tagged_block(body, "yml").as_deref(),
            Some("  - btc: true  ")
        );
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(find_tagged_block("```yml\n```\n", "yml").as_deref(), Some(""));
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let body = "```yml\n- btc: true\n";
        assert_eq!(find_tagged_block(body, "yml").as_deref(), Some("- btc: true"));
    }

    #[test]
    fn test_fenced_blocks_in_order() {
        let blocks = fenced_blocks(BODY);
        let infos: Vec<&str> = blocks.iter().map(|b| b.info.as_str()).collect();
        assert_eq!(infos, vec!["rust", "yml", "yml"]);
        assert!(blocks[2].content.contains("second.example"));
    }

    #[test]
    fn test_normalize_content() {
        assert_eq!(normalize_content("\u{FEFF}a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalize_content("plain"), "plain");
    }
}

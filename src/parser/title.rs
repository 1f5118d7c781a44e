//! Issue title parser
//!
//! Listing requests name the merchant and its category as the only two
//! quoted segments of the title, e.g.
//! `Renaming request for "Joe's Diner" "Restaurant"`.
//!
//! A quoted segment opens with `"` or `'` and closes at the next unescaped
//! occurrence of the same character on the same line. A backslash escapes the
//! character after it. An opening quote with no closing partner is plain text.
//!
//! An apostrophe touching a word character on its outer side (`Joe's`,
//! `shops'`) never opens or closes a single-quoted segment, so possessives in
//! the surrounding prose don't pair up with each other.

use regex::Regex;
use std::sync::LazyLock;

/// Double- or single-quoted segment, one alternative per quote character
static QUOTED_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\[^\n])*"|\B'(?:[^'\\\n]|\\[^\n]|'\w)*'\B"#)
        .expect("valid regex")
});

/// Name and category pulled from a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    pub name: String,
    pub category: String,
}

/// Parse a title of the form `... "<name>" ... "<category>" ...`
///
/// Returns `None` unless the title contains exactly two quoted segments and
/// both have non-empty content. Each part keeps its inner text verbatim, with
/// only the enclosing pair of quotes removed.
///
/// # Example
/// ```
/// use merchant_loader::parser::parse_title;
/// let parts = parse_title(r#"Now accepting "Bob's Cafe" "Cafe""#).unwrap();
/// assert_eq!(parts.name, "Bob's Cafe");
/// assert_eq!(parts.category, "Cafe");
/// ```
pub fn parse_title(title: &str) -> Option<TitleParts> {
    let segments = find_quoted_segments(title);
    let [name, category] = segments.as_slice() else {
        return None;
    };

    let name = strip_quotes(name);
    let category = strip_quotes(category);
    if name.is_empty() || category.is_empty() {
        return None;
    }

    Some(TitleParts {
        name: name.to_string(),
        category: category.to_string(),
    })
}

/// Find every quoted segment in `text`, in order, quotes included
pub fn find_quoted_segments(text: &str) -> Vec<&str> {
    QUOTED_SEGMENT_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Remove the delimiting quotes (both single-byte) from a matched segment
fn strip_quotes(segment: &str) -> &str {
    &segment[1..segment.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(name: &str, category: &str) -> Option<TitleParts> {
        Some(TitleParts {
            name: name.to_string(),
            category: category.to_string(),
        })
    }

    #[test]
    fn test_parse_title_double_quotes() {
        assert_eq!(
            parse_title(r#"Renaming request for "Joe's Diner" "Restaurant""#),
            parts("Joe's Diner", "Restaurant")
        );
    }

    #[test]
    fn test_parse_title_single_quotes() {
        assert_eq!(
            parse_title("Add 'Corner Shop' 'Groceries'"),
            parts("Corner Shop", "Groceries")
        );
    }

    #[test]
    fn test_parse_title_mixed_quotes() {
        assert_eq!(
            parse_title(r#"Add "Corner Shop" 'Groceries' please"#),
            parts("Corner Shop", "Groceries")
        );
    }

    #[test]
    fn test_parse_title_apostrophe_in_prose_is_ignored() {
        // The possessive apostrophe follows a letter, so it never opens
        assert_eq!(
            parse_title(r#"Joe's listing "Joe's Diner" "Restaurant""#),
            parts("Joe's Diner", "Restaurant")
        );
    }

    #[test]
    fn test_parse_title_keeps_escaped_quotes() {
        assert_eq!(
            parse_title(r#"Add "The \"Best\" Bar" "Bar""#),
            parts(r#"The \"Best\" Bar"#, "Bar")
        );
    }

    #[test]
    fn test_parse_title_no_quotes() {
        assert_eq!(parse_title("Please add my shop"), None);
        assert_eq!(parse_title(""), None);
    }

    #[test]
    fn test_parse_title_one_segment() {
        assert_eq!(parse_title(r#"Please add "Bob's Cafe""#), None);
    }

    #[test]
    fn test_parse_title_three_segments() {
        assert_eq!(parse_title(r#"Add "A" "B" "C""#), None);
        // A single-quoted aside in the prose is a third segment
        assert_eq!(parse_title(r#"Add 'urgent' "Cafe" "Food""#), None);
    }

    #[test]
    fn test_possessives_in_prose_do_not_pair_up() {
        assert_eq!(
            parse_title(r#"It's Bob's "Cafe" "Food""#),
            parts("Cafe", "Food")
        );
        assert_eq!(
            find_quoted_segments(r#"Joe's listing "Joe's Diner" "Restaurant""#),
            vec![r#""Joe's Diner""#, r#""Restaurant""#]
        );
    }

    #[test]
    fn test_apostrophe_inside_single_quoted_segment() {
        assert_eq!(
            parse_title("Add 'Joe's Diner' 'Restaurant'"),
            parts("Joe's Diner", "Restaurant")
        );
    }

    #[test]
    fn test_trailing_possessive_does_not_close() {
        // The apostrophe after `shops` follows a letter, so it never opens
        assert_eq!(
            find_quoted_segments("Add 'Corner Shop' for the shops' owners"),
            vec!["'Corner Shop'"]
        );
    }

    #[test]
    fn test_parse_title_empty_segment() {
        assert_eq!(parse_title(r#"Add "" "Cafe""#), None);
        assert_eq!(parse_title(r#"Add "Cafe" ''"#), None);
    }

    #[test]
    fn test_segment_does_not_span_lines() {
        assert_eq!(find_quoted_segments("\"a\nb\""), Vec::<&str>::new());
        assert_eq!(parse_title("\"Shop\nName\" \"Cafe\""), None);
    }

    #[test]
    fn test_trailing_backslash_does_not_close() {
        assert_eq!(find_quoted_segments(r#""abc\"#), Vec::<&str>::new());
    }

    #[test]
    fn test_find_quoted_segments_unicode() {
        let segments = find_quoted_segments(r#"Añadir "Café Olé" "Cafetería""#);
        assert_eq!(segments, vec![r#""Café Olé""#, r#""Cafetería""#]);
    }
}

//! Issue reference extraction and order-preserving deduplication.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::IssueError;

/// Pattern for issue tracker keys such as `ABC-123`.
pub const ISSUE_REF_PATTERN: &str = r"[A-Z]+-[0-9]+";

static DEFAULT_PATTERN: LazyLock<IssuePattern> = LazyLock::new(|| {
    IssuePattern::new(ISSUE_REF_PATTERN).expect("built-in issue pattern must compile")
});

/// A compiled issue reference pattern.
#[derive(Debug, Clone)]
pub struct IssuePattern {
    re: Regex,
}

impl IssuePattern {
    /// Compile a pattern for matching issue references.
    pub fn new(pattern: &str) -> Result<Self, IssueError> {
        let re = Regex::new(pattern).map_err(|source| IssueError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { re })
    }

    /// Every non-overlapping match in `text`, left to right, duplicates included.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Extract issue references using the built-in `[A-Z]+-[0-9]+` pattern.
///
/// Matching is case-sensitive and greedy over the whole uppercase run, so
/// `XABC-123` yields `XABC-123`.
pub fn extract_issue_refs(text: &str) -> Vec<String> {
    DEFAULT_PATTERN.extract(text)
}

/// Concatenate `first` and `second`, keeping only the first occurrence of each value.
pub fn dedup_refs(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut result = Vec::with_capacity(first.len() + second.len());

    for item in first.iter().chain(second) {
        if seen.insert(item.as_str()) {
            result.push(item.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_single_ref() {
        assert_eq!(extract_issue_refs("ABC-123"), strings(&["ABC-123"]));
    }

    #[test]
    fn test_extract_multiple_refs_in_order() {
        let text = "fix(ABC-456,DEF-146): msg\n\nrelated to XYZ-7890";
        assert_eq!(
            extract_issue_refs(text),
            strings(&["ABC-456", "DEF-146", "XYZ-7890"])
        );
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        assert!(extract_issue_refs("abc-123").is_empty());
        assert!(extract_issue_refs("Abc-123").is_empty());
        assert_eq!(extract_issue_refs("abc-1 DEF-2"), strings(&["DEF-2"]));
    }

    #[test]
    fn test_extract_keeps_whole_uppercase_run() {
        assert_eq!(extract_issue_refs("XABC-123"), strings(&["XABC-123"]));
        assert_eq!(extract_issue_refs("xABC-123"), strings(&["ABC-123"]));
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        assert_eq!(
            extract_issue_refs("ABC-1 and again ABC-1"),
            strings(&["ABC-1", "ABC-1"])
        );
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract_issue_refs("").is_empty());
    }

    #[test]
    fn test_extract_requires_digits() {
        assert!(extract_issue_refs("ABC- 12").is_empty());
        assert!(extract_issue_refs("ABC-").is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = IssuePattern::new("[A-Z");
        assert!(matches!(result, Err(IssueError::Pattern { .. })));
    }

    #[test]
    fn test_custom_pattern() {
        let pattern = IssuePattern::new(r"#[0-9]+").unwrap();
        assert_eq!(pattern.extract("fixes #12 and #3"), strings(&["#12", "#3"]));
    }

    #[test]
    fn test_dedup_with_empty_first() {
        let result = dedup_refs(&[], &strings(&["b", "c", "d"]));
        assert_eq!(result, strings(&["b", "c", "d"]));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let result = dedup_refs(&strings(&["a", "b", "c"]), &strings(&["b", "c", "d"]));
        assert_eq!(result, strings(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_dedup_within_a_single_list() {
        let result = dedup_refs(&strings(&["a", "a", "b", "a"]), &[]);
        assert_eq!(result, strings(&["a", "b"]));
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let once = dedup_refs(&strings(&["x", "y", "x"]), &strings(&["z", "y"]));
        let twice = dedup_refs(&once, &[]);
        assert_eq!(once, twice);
        assert_eq!(dedup_refs(&[], &once), once);
    }
}

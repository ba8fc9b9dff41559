//! Markdown links from issue references to the issue tracker.

/// Browse URL prefix used when none is configured.
pub const DEFAULT_ISSUE_BASE_URL: &str = "https://keends.atlassian.net/browse/";

/// Heading placed above the issue links in a pull request body.
pub const DEFAULT_ISSUE_HEADING: &str = "### Jira Link";

/// Formats issue references as markdown links into an issue tracker.
///
/// Links are built by plain templating: `[KEY](<base_url>KEY)`. Nothing is
/// fetched and referenced issues are not checked for existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLinker {
    base_url: String,
    heading: String,
}

impl Default for IssueLinker {
    fn default() -> Self {
        Self::new(DEFAULT_ISSUE_BASE_URL, DEFAULT_ISSUE_HEADING)
    }
}

impl IssueLinker {
    pub fn new(base_url: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            heading: heading.into(),
        }
    }

    /// Append one `[KEY](url)` line per reference, each terminated by a newline.
    pub fn push_links(&self, buf: &mut String, refs: &[String]) {
        for key in refs {
            buf.push('[');
            buf.push_str(key);
            buf.push_str("](");
            buf.push_str(&self.base_url);
            buf.push_str(key);
            buf.push_str(")\n");
        }
    }

    /// Append the heading followed by a blank line.
    pub fn push_heading(&self, buf: &mut String) {
        buf.push_str(&self.heading);
        buf.push_str("\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_link_format() {
        let linker = IssueLinker::default();
        let mut buf = String::new();
        linker.push_links(&mut buf, &["ABC-123".to_string()]);
        assert_eq!(buf, "[ABC-123](https://keends.atlassian.net/browse/ABC-123)\n");
    }

    #[test]
    fn test_custom_base_url_and_heading() {
        let linker = IssueLinker::new("https://example.org/issues/", "## Tickets");
        let mut buf = String::new();
        linker.push_heading(&mut buf);
        linker.push_links(&mut buf, &["X-1".to_string(), "Y-2".to_string()]);
        assert_eq!(
            buf,
            "## Tickets\n\n[X-1](https://example.org/issues/X-1)\n[Y-2](https://example.org/issues/Y-2)\n"
        );
    }

    #[test]
    fn test_no_refs_pushes_nothing() {
        let mut buf = String::from("keep");
        IssueLinker::default().push_links(&mut buf, &[]);
        assert_eq!(buf, "keep");
    }
}

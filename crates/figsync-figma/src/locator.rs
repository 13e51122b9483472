//! Figma resource URL parsing.
//!
//! Figma links come in several shapes:
//!
//! ```text
//! https://www.figma.com/file/abc123/Name?node-id=12-34
//! https://www.figma.com/design/abc123/Name?node-id=12%3A34&t=xyz
//! ```
//!
//! Only the file id (path segment after `/file/` or `/design/`) and the
//! optional `node-id` query parameter matter.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

static FILE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:file|design)/([a-zA-Z0-9]+)").unwrap());

static NODE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"node-id=([^&]+)").unwrap());

/// File and node identity parsed from a Figma URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    /// Figma file id.
    pub file_id: String,
    /// Node id within the file, as written in the URL (dash or colon form).
    pub node_id: Option<String>,
}

impl ResourceReference {
    /// Parse a Figma URL. Returns `None` if no file id is present.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        Some(Self {
            file_id: extract_file_id(url)?,
            node_id: extract_node_id(url),
        })
    }
}

/// Extract the file id from a `/file/<id>` or `/design/<id>` URL path.
#[must_use]
pub fn extract_file_id(url: &str) -> Option<String> {
    FILE_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Extract the `node-id` query parameter.
///
/// The value is percent-decoded; any `%3A` still present afterwards (from a
/// double-encoded link) becomes `:`. Dash-separated ids are returned as is.
#[must_use]
pub fn extract_node_id(url: &str) -> Option<String> {
    let raw = NODE_ID_RE.captures(url)?.get(1)?.as_str();
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    Some(decoded.replace("%3A", ":").replace("%3a", ":"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_file_id_design_url() {
        let url = "https://x.com/design/abc123/Name?node-id=12-34";
        assert_eq!(extract_file_id(url), Some("abc123".to_owned()));
    }

    #[test]
    fn test_extract_file_id_legacy_file_url() {
        let url = "https://www.figma.com/file/XyZ789/Design-System";
        assert_eq!(extract_file_id(url), Some("XyZ789".to_owned()));
    }

    #[test]
    fn test_extract_file_id_stops_at_non_alphanumeric() {
        let url = "https://www.figma.com/design/abc123-rest";
        assert_eq!(extract_file_id(url), Some("abc123".to_owned()));
    }

    #[test]
    fn test_extract_file_id_missing() {
        assert_eq!(extract_file_id("https://www.figma.com/proto/abc"), None);
        assert_eq!(extract_file_id("not a url"), None);
    }

    #[test]
    fn test_extract_node_id_dash_form() {
        let url = "https://x.com/design/abc123/Name?node-id=12-34";
        assert_eq!(extract_node_id(url), Some("12-34".to_owned()));
    }

    #[test]
    fn test_extract_node_id_percent_encoded_colon() {
        let url = "https://x.com/design/abc123/Name?node-id=12%3A34";
        assert_eq!(extract_node_id(url), Some("12:34".to_owned()));
    }

    #[test]
    fn test_extract_node_id_double_encoded_colon() {
        let url = "https://x.com/design/abc123/Name?node-id=12%253A34";
        assert_eq!(extract_node_id(url), Some("12:34".to_owned()));
    }

    #[test]
    fn test_extract_node_id_followed_by_other_params() {
        let url = "https://x.com/design/abc123/Name?node-id=235-123442&t=abc&mode=dev";
        assert_eq!(extract_node_id(url), Some("235-123442".to_owned()));
    }

    #[test]
    fn test_extract_node_id_missing() {
        assert_eq!(extract_node_id("https://x.com/design/abc123/Name"), None);
    }

    #[test]
    fn test_parse_reference() {
        let reference = ResourceReference::parse("https://x.com/file/abc/N?node-id=1-2").unwrap();
        assert_eq!(reference.file_id, "abc");
        assert_eq!(reference.node_id.as_deref(), Some("1-2"));

        assert_eq!(ResourceReference::parse("https://x.com/?node-id=1-2"), None);
    }
}

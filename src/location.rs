//! The location of the document URIs are resolved in.

use crate::value::UriValue;
use alloc::{
    format,
    string::{String, ToString},
};

/// The parts of a browser document location that base resolution needs.
///
/// The protocol carries its trailing colon, as `location.protocol` does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentLocation {
    /// The protocol with its colon, e.g. `https:`.
    pub protocol: String,
    /// Host name and optional port.
    pub host: Option<String>,
    /// The full location.
    pub href: Option<String>,
    /// The path of the document.
    pub pathname: Option<String>,
}

impl DocumentLocation {
    /// Builds a location from a full URL the way a browser would expose it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::DocumentLocation;
    ///
    /// let loc = DocumentLocation::from_href("https://example.com:8443/app/index.html?x#y");
    /// assert_eq!(loc.protocol, "https:");
    /// assert_eq!(loc.host.as_deref(), Some("example.com:8443"));
    /// assert_eq!(loc.pathname.as_deref(), Some("/app/index.html"));
    /// ```
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        let href = href.trim();
        let uri = UriValue::parse(href);
        if uri.is_opaque() {
            let protocol = href.split_once(':').map_or("", |(p, _)| p);
            return Self {
                protocol: format!("{protocol}:"),
                href: Some(href.to_string()),
                ..Self::default()
            };
        }

        let host = match uri.port() {
            "" => uri.host().to_string(),
            port => format!("{}:{}", uri.host(), port),
        };
        Self {
            protocol: format!("{}:", uri.protocol()),
            host: Some(host),
            href: Some(href.to_string()),
            pathname: Some(uri.path().as_str().to_string()),
        }
    }

    /// Returns the base URL of the document.
    ///
    /// Equivalent to [`get_document_base_url`]`(self)`.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> String {
        get_document_base_url(self)
    }
}

/// Computes the base URL documents at `loc` resolve relative URLs against.
///
/// Locations under protocols other than `http`, `https` and `file`
/// (`applewebdata:`, `about:`, ...) start from their `href`, the others from
/// protocol, host and pathname. If the result is rooted in an authority, its
/// query, fragment and final path segment are then dropped and a trailing `/` ensured.
///
/// # Examples
///
/// ```
/// use lenient_uri::{location::get_document_base_url, DocumentLocation};
///
/// let loc = DocumentLocation::from_href("http://example.com/dir/page.html?q=1");
/// assert_eq!(get_document_base_url(&loc), "http://example.com/dir/");
///
/// let loc = DocumentLocation::from_href("applewebdata://1234/page");
/// assert_eq!(get_document_base_url(&loc), "applewebdata://1234/");
///
/// let loc = DocumentLocation::from_href("about:blank");
/// assert_eq!(get_document_base_url(&loc), "about:blank");
/// ```
#[must_use]
pub fn get_document_base_url(loc: &DocumentLocation) -> String {
    let mut base = if !loc.protocol.starts_with("http") && loc.protocol != "file:" {
        loc.href.clone().unwrap_or_default()
    } else {
        format!(
            "{}//{}{}",
            loc.protocol,
            loc.host.as_deref().unwrap_or(""),
            loc.pathname.as_deref().unwrap_or("")
        )
    };

    if is_authority_rooted(&base) {
        if let Some(i) = base.find(&['?', '#'][..]) {
            base.truncate(i);
        }
        if let Some(i) = last_segment_start(&base) {
            base.truncate(i);
        }
        if !base.ends_with(&['/', '\\'][..]) {
            base.push('/');
        }
    }
    base
}

/// Checks for `scheme://host/` or `scheme:///host/`, where the host part is non-empty.
fn is_authority_rooted(s: &str) -> bool {
    let Some(colon) = s.find(':') else {
        return false;
    };
    let Some(rest) = s[colon + 1..].strip_prefix("//") else {
        return false;
    };
    let host_then_slash = |r: &str| matches!(r.find('/'), Some(i) if i > 0);
    colon > 0 && (host_then_slash(rest) || rest.strip_prefix('/').map_or(false, host_then_slash))
}

/// Returns the index of the separator before a non-empty final segment.
fn last_segment_start(s: &str) -> Option<usize> {
    match s.rfind('/') {
        Some(i) => (i + 1 < s.len()).then_some(i),
        None => s.find('\\').filter(|&i| i + 1 < s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_rooted() {
        assert!(is_authority_rooted("http://host/"));
        assert!(is_authority_rooted("file:///C:/dir/"));
        assert!(is_authority_rooted("http:///host/"));
        assert!(!is_authority_rooted("http://host"));
        assert!(!is_authority_rooted("http:////"));
        assert!(!is_authority_rooted(":host/"));
        assert!(!is_authority_rooted("about:blank"));
    }

    #[test]
    fn last_segment() {
        assert_eq!(last_segment_start("http://h/a/b.html"), Some(10));
        assert_eq!(last_segment_start("http://h/a/"), None);
        assert_eq!(last_segment_start("c:\\dir\\file"), Some(2));
    }
}

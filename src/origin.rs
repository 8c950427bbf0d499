//! Origin comparison.

use crate::value::UriValue;

/// Returns the default port of a protocol, if it has a well-known one.
///
/// # Examples
///
/// ```
/// use lenient_uri::origin::default_port;
///
/// assert_eq!(default_port("https"), Some(443));
/// assert_eq!(default_port("gopher"), None);
/// ```
#[must_use]
pub fn default_port(protocol: &str) -> Option<u16> {
    match protocol {
        "ftp" => Some(21),
        "http" => Some(80),
        "https" => Some(443),
        "mailto" => Some(25),
        _ => None,
    }
}

/// Interprets a port, falling back to the default when it is empty.
fn effective_port(port: &str, default: u16) -> Option<u16> {
    if port.is_empty() {
        Some(default)
    } else {
        port.parse().ok()
    }
}

impl UriValue {
    /// Checks whether `other` has the same origin as this URI, after RFC 6454.
    ///
    /// Host and protocol must match exactly. Ports match if they are equal
    /// as written, or if the protocol has a default port, one side omits its
    /// port and the other names that default. Protocols without a known default port only match
    /// with identical ports. Opaque URIs have no origin and never match.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::UriValue;
    ///
    /// let a = UriValue::parse("http://x.com:80/a");
    /// assert!(a.is_same_origin(&UriValue::parse("http://x.com/b")));
    /// assert!(!a.is_same_origin(&UriValue::parse("https://x.com/a")));
    /// assert!(!a.is_same_origin(&UriValue::parse("http://x.com:8080/a")));
    /// assert!(!a.is_same_origin(&UriValue::parse("http://x.com:080/a")));
    /// ```
    #[must_use]
    pub fn is_same_origin(&self, other: &UriValue) -> bool {
        let (Some(a), Some(b)) = (self.parts(), other.parts()) else {
            return false;
        };
        if !a.authority.same_host(&b.authority) || a.protocol != b.protocol {
            return false;
        }

        let (a_port, b_port) = (a.authority.port(), b.authority.port());
        if a_port == b_port {
            return true;
        }
        // Only an omitted port stands for the default; explicit ports compare verbatim.
        if !a_port.is_empty() && !b_port.is_empty() {
            return false;
        }
        match default_port(&a.protocol) {
            Some(default) => match effective_port(a_port, default) {
                Some(port) => effective_port(b_port, default) == Some(port),
                None => false,
            },
            None => false,
        }
    }
}

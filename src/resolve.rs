//! Resolution against a base URI and relative URI computation.

use crate::{
    parser,
    path::{to_abs_path, to_rel_path},
    value::{Authority, Parts, Repr, UriSettings, UriValue},
};
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
};

/// Protocol assumed for host-less input when no base supplies one.
const DEFAULT_PROTOCOL: &str = "http";

pub(crate) fn parse_with(url: &str, settings: UriSettings<'_>) -> UriValue {
    let url = url.trim();

    if parser::is_opaque(url) {
        tracing::trace!(url, "keeping opaque uri verbatim");
        return UriValue::from_repr(Repr::Opaque(url.to_owned()));
    }

    // An opaque base has nothing to offer.
    let base = settings.base_uri.and_then(UriValue::parts);
    let protocol_relative = url.starts_with("//");
    let default_protocol = base
        .map(|b| b.protocol.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PROTOCOL);

    let mut parts = if url.starts_with('/') && !protocol_relative {
        parser::parse_tail(default_protocol, url)
    } else if !parser::has_hier_prefix(url) {
        let base_dir = match base {
            Some(b) => b.directory.clone(),
            None => settings
                .document
                .and_then(|doc| doc.href.as_deref())
                .map(|href| UriValue::parse(href).directory().to_string())
                .unwrap_or_default(),
        };
        tracing::trace!(url, base_dir = %base_dir, "resolving relative path");

        match base {
            Some(b) if b.protocol.is_empty() => parser::parse_tail("", &to_abs_path(&base_dir, url)),
            _ => {
                let split = url.find(&['?', '#'][..]).unwrap_or(url.len());
                let (path, rest) = url.split_at(split);
                let mut tail = to_abs_path(&base_dir, path);
                tail.push_str(rest);
                parser::parse_tail(default_protocol, &tail)
            }
        }
    } else {
        parser::parse(url)
    };

    if let Some(base) = base {
        inherit(&mut parts, base);
    }
    if protocol_relative {
        parts.protocol = String::new();
    }

    UriValue::from_repr(Repr::Hierarchical(parts))
}

/// Fills in the protocol, user info, host and port that `parts` lacks from `base`.
fn inherit(parts: &mut Parts, base: &Parts) {
    if parts.protocol.is_empty() {
        parts.protocol = base.protocol.clone();
    }
    if parts.user_info.is_empty() {
        parts.user_info = base.user_info.clone();
        parts.user = base.user.clone();
        parts.password = base.password.clone();
    }

    if parts.authority.is_synthetic() {
        tracing::trace!(host = base.authority.host(), "substituting synthetic host");
        parts.authority = base.authority.clone();
    } else if parts.authority.host().is_empty() {
        if base.authority.is_synthetic() {
            parts.authority = Authority::Synthetic;
        } else if let Authority::Real(hp) = &mut parts.authority {
            hp.host = base.authority.host().to_owned();
        }
    }
}

impl UriValue {
    /// Converts `uri` into a URI relative to this one.
    ///
    /// `uri` is first resolved with `self` as its base. If the result lives
    /// on another host or port, or has another non-empty protocol, its full
    /// form is returned since no relative form would reach it. If it
    /// serializes like `self`, optionally but for a trailing slash, the form of
    /// `self` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::UriValue;
    ///
    /// let uri = UriValue::parse("http://www.site.com/dir/");
    /// assert_eq!(uri.to_relative("http://www.site.com/dir/somedir/somefile.htm"), "somedir/somefile.htm");
    /// assert_eq!(uri.to_relative("/img/a.png?v=2"), "../img/a.png?v=2");
    /// assert_eq!(uri.to_relative("https://other.com/dir/"), "https://other.com/dir/");
    /// ```
    #[must_use]
    pub fn to_relative(&self, uri: &str) -> String {
        if uri == "./" {
            return uri.to_owned();
        }

        let resolved = UriValue::with_base(uri, self);
        let (Some(this), Some(that)) = (self.parts(), resolved.parts()) else {
            return resolved.as_str().to_owned();
        };

        let other_host = !that.authority.is_synthetic()
            && !that.authority.host().is_empty()
            && !this.authority.same_host(&that.authority);
        let other_port = this.authority.port() != that.authority.port();
        let other_protocol = this.protocol != that.protocol && !that.protocol.is_empty();
        if other_host || other_port || other_protocol {
            tracing::debug!(uri = resolved.as_str(), "no relative form across origins");
            return resolved.as_str().to_owned();
        }

        let this_str = self.as_str();
        let that_str = resolved.as_str();
        if this_str == that_str || this_str.strip_suffix('/') == Some(that_str) {
            return this_str.to_owned();
        }

        let mut out = to_rel_path(&this.path, &that.path);
        if !that.query.is_empty() {
            out.push('?');
            out.push_str(&that.query);
        }
        if !that.anchor.is_empty() {
            out.push('#');
            out.push_str(&that.anchor);
        }
        out
    }

    /// Converts `uri` into an absolute URI with this one as its base.
    ///
    /// When `no_host` is `true` and the result shares the origin of `self`,
    /// the protocol, user info, host and port are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::UriValue;
    ///
    /// let uri = UriValue::parse("http://www.site.com/dir/");
    /// assert_eq!(uri.to_absolute("somedir/somefile.htm", false), "http://www.site.com/dir/somedir/somefile.htm");
    /// assert_eq!(uri.to_absolute("../a.htm", true), "/a.htm");
    /// assert_eq!(uri.to_absolute("http://b.com/a.htm", true), "http://b.com/a.htm");
    /// ```
    #[must_use]
    pub fn to_absolute(&self, uri: &str, no_host: bool) -> String {
        let resolved = UriValue::with_base(uri, self);
        let no_proto_host = no_host && self.is_same_origin(&resolved);
        resolved.get_uri(no_proto_host).into_owned()
    }
}

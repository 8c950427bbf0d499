use crate::{
    location::DocumentLocation,
    path::{split_loose, Path},
};
use alloc::{
    borrow::{Cow, ToOwned},
    string::String,
};
use core::{cell::OnceCell, convert::Infallible, hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The host and port of an authority that was actually written down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HostPort {
    /// Host name, possibly empty.
    pub host: String,
    /// Port digits, empty if none were given.
    pub port: String,
}

/// Where the host of a [`UriValue`] comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Authority {
    /// A host (and port) present in the parsed string or inherited from a base.
    Real(HostPort),
    /// A placeholder for a host-less input such as `/a/b` or `page.html`
    /// that no base URI was available to fill in.
    ///
    /// Serializes as an empty host and has no port.
    Synthetic,
}

impl Authority {
    /// Returns the host, or an empty string for a synthetic authority.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        match self {
            Authority::Real(hp) => &hp.host,
            Authority::Synthetic => "",
        }
    }

    /// Returns the port, or an empty string for a synthetic authority.
    #[inline]
    #[must_use]
    pub fn port(&self) -> &str {
        match self {
            Authority::Real(hp) => &hp.port,
            Authority::Synthetic => "",
        }
    }

    /// Returns `true` if the authority is [`Synthetic`](Authority::Synthetic).
    #[inline]
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        matches!(self, Authority::Synthetic)
    }

    /// Checks whether both authorities name the same host.
    ///
    /// Two synthetic authorities name the same host; a synthetic and a real one never do.
    pub(crate) fn same_host(&self, other: &Authority) -> bool {
        match (self, other) {
            (Authority::Real(a), Authority::Real(b)) => a.host == b.host,
            (Authority::Synthetic, Authority::Synthetic) => true,
            _ => false,
        }
    }
}

impl Default for Authority {
    fn default() -> Self {
        Authority::Real(HostPort::default())
    }
}

/// Decomposed fields of a hierarchical URI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Parts {
    pub(crate) protocol: String,
    pub(crate) raw_authority: String,
    pub(crate) user_info: String,
    pub(crate) user: String,
    pub(crate) password: String,
    pub(crate) authority: Authority,
    pub(crate) path: String,
    pub(crate) directory: String,
    pub(crate) file: String,
    pub(crate) query: String,
    pub(crate) anchor: String,
}

impl Parts {
    pub(crate) fn serialize(&self, no_proto_host: bool) -> String {
        let mut len = self.path.len() + self.query.len() + self.anchor.len() + 2;
        if !no_proto_host {
            len += self.protocol.len() + 3;
            len += self.user_info.len() + 1;
            len += self.authority.host().len() + self.authority.port().len() + 1;
        }

        let mut buf = String::with_capacity(len);
        if !no_proto_host {
            if !self.protocol.is_empty() {
                buf.push_str(&self.protocol);
                buf.push(':');
            }
            buf.push_str("//");
            if !self.user_info.is_empty() {
                buf.push_str(&self.user_info);
                buf.push('@');
            }
            buf.push_str(self.authority.host());
            let port = self.authority.port();
            if !port.is_empty() {
                buf.push(':');
                buf.push_str(port);
            }
        }
        buf.push_str(&self.path);
        if !self.query.is_empty() {
            buf.push('?');
            buf.push_str(&self.query);
        }
        if !self.anchor.is_empty() {
            buf.push('#');
            buf.push_str(&self.anchor);
        }
        buf
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) enum Repr {
    /// Kept verbatim: `mailto:x`, `#anchor` and the like.
    Opaque(String),
    Hierarchical(Parts),
}

/// Options for [`UriValue::with_settings`].
///
/// # Examples
///
/// ```
/// use lenient_uri::{UriSettings, UriValue};
///
/// let base = UriValue::parse("https://example.com/docs/");
/// let uri = UriValue::with_settings("../img/a.png", UriSettings::new().base_uri(&base));
/// assert_eq!(uri.as_str(), "https://example.com/img/a.png");
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[must_use]
pub struct UriSettings<'a> {
    pub(crate) base_uri: Option<&'a UriValue>,
    pub(crate) document: Option<&'a DocumentLocation>,
}

impl<'a> UriSettings<'a> {
    /// Creates settings with neither a base URI nor a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URI supplying the protocol, user info, host and port
    /// that the parsed string omits, and the directory relative paths are resolved in.
    pub fn base_uri(mut self, base: &'a UriValue) -> Self {
        self.base_uri = Some(base);
        self
    }

    /// Sets the document whose directory relative paths are resolved in
    /// when no base URI is given.
    ///
    /// Without either, relative paths are resolved against the root.
    pub fn document(mut self, document: &'a DocumentLocation) -> Self {
        self.document = Some(document);
        self
    }
}

/// A permissively parsed URI.
///
/// Parsing never fails: anything that is not shaped like a hierarchical URI
/// degrades to a best-effort decomposition, and URIs with a non-hierarchical
/// scheme (`mailto:`, `tel:`, ...) or a bare fragment are kept verbatim as
/// *opaque* values whose components all read as empty.
///
/// A value is immutable apart from [`set_path`](Self::set_path).
/// The canonical string form is computed lazily and cached.
///
/// # Thread safety
///
/// `UriValue` is `Send` but not `Sync`: the string cache is a single-threaded
/// [`OnceCell`]. Move a value to another thread or [`Clone`] it for each
/// thread, or share its string form (`as_str().to_owned()`) instead.
///
/// # Examples
///
/// ```
/// use lenient_uri::UriValue;
///
/// let uri = UriValue::parse("http://user@example.com:8080/dir/page.html?q=1#top");
/// assert_eq!(uri.protocol(), "http");
/// assert_eq!(uri.user_info(), "user");
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), "8080");
/// assert_eq!(uri.directory(), "/dir/");
/// assert_eq!(uri.file(), "page.html");
/// assert_eq!(uri.query(), "q=1");
/// assert_eq!(uri.anchor(), "top");
///
/// let base = UriValue::parse("http://example.com/c/d.html");
/// let uri = UriValue::with_base("/a/b.html", &base);
/// assert_eq!(uri.as_str(), "http://example.com/a/b.html");
/// ```
#[derive(Clone)]
pub struct UriValue {
    pub(crate) repr: Repr,
    pub(crate) source: OnceCell<String>,
}

impl UriValue {
    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self {
            repr,
            source: OnceCell::new(),
        }
    }

    /// Parses a URI with no base URI and no document.
    ///
    /// Host-less inputs get the `http` protocol and a [synthetic](Authority::Synthetic) host.
    #[must_use]
    pub fn parse(url: &str) -> Self {
        Self::with_settings(url, UriSettings::new())
    }

    /// Parses a URI, filling in whatever it omits from `base`.
    #[must_use]
    pub fn with_base(url: &str, base: &UriValue) -> Self {
        Self::with_settings(url, UriSettings::new().base_uri(base))
    }

    /// Parses a URI with the given settings.
    #[must_use]
    pub fn with_settings(url: &str, settings: UriSettings<'_>) -> Self {
        crate::resolve::parse_with(url, settings)
    }

    pub(crate) fn parts(&self) -> Option<&Parts> {
        match &self.repr {
            Repr::Opaque(_) => None,
            Repr::Hierarchical(parts) => Some(parts),
        }
    }

    fn field(&self, f: impl FnOnce(&Parts) -> &str) -> &str {
        self.parts().map_or("", f)
    }

    /// Returns `true` if the URI is kept verbatim without decomposition.
    #[inline]
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        matches!(self.repr, Repr::Opaque(_))
    }

    /// Returns the protocol, without `:` or `//`.
    ///
    /// An empty protocol on a non-opaque URI means it is protocol-relative.
    #[must_use]
    pub fn protocol(&self) -> &str {
        self.field(|p| &p.protocol)
    }

    /// Returns the authority as it was scanned, including user info and port.
    ///
    /// This is empty for a synthetic host and is not updated when
    /// the host is inherited from a base URI.
    #[must_use]
    pub fn raw_authority(&self) -> &str {
        self.field(|p| &p.raw_authority)
    }

    /// Returns the host and port, or `None` for an opaque URI.
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.parts().map(|p| &p.authority)
    }

    /// Returns the `user[:password]` part of the authority.
    #[must_use]
    pub fn user_info(&self) -> &str {
        self.field(|p| &p.user_info)
    }

    /// Returns the user name.
    #[must_use]
    pub fn user(&self) -> &str {
        self.field(|p| &p.user)
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.field(|p| &p.password)
    }

    /// Returns the host, empty if there is none or it is synthetic.
    #[must_use]
    pub fn host(&self) -> &str {
        self.field(|p| p.authority.host())
    }

    /// Returns the port digits, empty if none.
    #[must_use]
    pub fn port(&self) -> &str {
        self.field(|p| p.authority.port())
    }

    /// Returns the path, including the file name if any.
    #[must_use]
    pub fn path(&self) -> &Path {
        Path::new(self.field(|p| &p.path))
    }

    /// Returns the path up to and including its last directory separator.
    #[must_use]
    pub fn directory(&self) -> &str {
        self.field(|p| &p.directory)
    }

    /// Returns the file name at the end of the path, if the path has one.
    #[must_use]
    pub fn file(&self) -> &str {
        self.field(|p| &p.file)
    }

    /// Returns the query, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> &str {
        self.field(|p| &p.query)
    }

    /// Returns the fragment, without the leading `#`.
    #[must_use]
    pub fn anchor(&self) -> &str {
        self.field(|p| &p.anchor)
    }

    /// Returns the path followed by the query and the anchor.
    #[must_use]
    pub fn relative(&self) -> String {
        self.parts().map_or_else(String::new, |p| p.serialize(true))
    }

    /// Returns the canonical string form of the URI.
    ///
    /// The result is computed on first use and cached until the next [`set_path`](Self::set_path).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Opaque(s) => s,
            Repr::Hierarchical(parts) => self.source.get_or_init(|| parts.serialize(false)),
        }
    }

    /// Serializes the URI, leaving out the protocol, user info, host and port
    /// when `no_proto_host` is `true`.
    ///
    /// Opaque URIs always serialize verbatim. A host-stripped form is never cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::UriValue;
    ///
    /// let uri = UriValue::parse("https://example.com/a/b.html?x#y");
    /// assert_eq!(uri.get_uri(false), "https://example.com/a/b.html?x#y");
    /// assert_eq!(uri.get_uri(true), "/a/b.html?x#y");
    /// ```
    #[must_use]
    pub fn get_uri(&self, no_proto_host: bool) -> Cow<'_, str> {
        match (&self.repr, no_proto_host) {
            (Repr::Hierarchical(parts), true) => Cow::Owned(parts.serialize(true)),
            _ => Cow::Borrowed(self.as_str()),
        }
    }

    /// Replaces the path, splitting it into directory and file the way parsing does.
    ///
    /// Afterwards the value equals the one parsed from its own string form.
    ///
    /// Setting the path of an opaque URI turns it into a protocol-relative
    /// URI holding only that path.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::UriValue;
    ///
    /// let mut uri = UriValue::parse("http://example.com/a/b.html?q");
    /// uri.set_path("/c/d.html");
    /// assert_eq!(uri.directory(), "/c/");
    /// assert_eq!(uri.file(), "d.html");
    /// assert_eq!(uri.as_str(), "http://example.com/c/d.html?q");
    ///
    /// uri.set_path("/c/d");
    /// assert_eq!(uri.directory(), "/c/d");
    /// assert_eq!(uri.file(), "");
    /// ```
    pub fn set_path(&mut self, path: &str) {
        if let Repr::Opaque(s) = &self.repr {
            tracing::debug!(uri = %s, "set_path on opaque uri drops its text");
            self.repr = Repr::Hierarchical(Parts::default());
        }
        if let Repr::Hierarchical(parts) = &mut self.repr {
            let (directory, file) = split_loose(path);
            parts.directory = directory.to_owned();
            parts.file = file.to_owned();
            parts.path = path.to_owned();
        }
        self.source = OnceCell::new();
    }
}

impl Default for UriValue {
    /// Returns an empty protocol-relative URI, serialized as `//`.
    fn default() -> Self {
        Self::from_repr(Repr::Hierarchical(Parts::default()))
    }
}

impl PartialEq for UriValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl Eq for UriValue {}

impl hash::Hash for UriValue {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl FromStr for UriValue {
    type Err = Infallible;

    /// Equivalent to [`UriValue::parse`].
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for UriValue {
    #[inline]
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl AsRef<str> for UriValue {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl Serialize for UriValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UriValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(UriValue::parse(&s))
    }
}

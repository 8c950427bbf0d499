//! Filesystem-style path arithmetic.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::Split};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// The path component of a [`UriValue`].
///
/// Any string slice is a valid `Path`; the type only attaches the path
/// arithmetic used by [`UriValue`] to it.
///
/// [`UriValue`]: crate::UriValue
///
/// # Examples
///
/// ```
/// use lenient_uri::Path;
///
/// let path = Path::new("/dir/sub/page.html");
/// assert_eq!(path.directory(), "/dir/sub/");
/// assert_eq!(path.file(), "page.html");
/// assert_eq!(path.to_rel("/dir/img/logo.png"), "../img/logo.png");
/// ```
#[derive(RefCastCustom, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Converts a string slice to `&Path`.
    #[ref_cast_custom]
    #[inline]
    pub const fn new(s: &str) -> &Path;

    /// Returns the path as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns `true` if the path is absolute, i.e., beginning with "/".
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Returns the directory part of the path, up to and including the last "/".
    ///
    /// A final segment only counts as a file when it looks like a file name,
    /// that is, it ends with a dot followed by at least one non-dot character.
    /// Otherwise the whole path is taken as the directory.
    ///
    /// ```
    /// use lenient_uri::Path;
    ///
    /// assert_eq!(Path::new("/a/b.html").directory(), "/a/");
    /// assert_eq!(Path::new("/a/b").directory(), "/a/b");
    /// assert_eq!(Path::new("/a/b.").directory(), "/a/b.");
    /// ```
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &str {
        split_loose(&self.inner).0
    }

    /// Returns the file part of the path.
    ///
    /// See [`directory`](Self::directory) for what counts as a file.
    #[inline]
    #[must_use]
    pub fn file(&self) -> &str {
        split_loose(&self.inner).1
    }

    /// Returns an iterator over the segments of the path.
    ///
    /// The empty string before a leading "/" is not a segment.
    #[inline]
    pub fn segments(&self) -> Split<'_, char> {
        let path = self.inner.strip_prefix('/').unwrap_or(&self.inner);
        path.split('/')
    }

    /// Resolves `path` against this path taken as a directory.
    ///
    /// Equivalent to [`to_abs_path`]`(self.as_str(), path)`.
    #[must_use]
    pub fn to_abs(&self, path: &str) -> String {
        to_abs_path(&self.inner, path)
    }

    /// Computes a path relative to this path leading to `path`.
    ///
    /// Equivalent to [`to_rel_path`]`(self.as_str(), path)`.
    #[must_use]
    pub fn to_rel(&self, path: &str) -> String {
        to_rel_path(&self.inner, path)
    }
}

impl fmt::Display for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Path {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for Path {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Path {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Path {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Splits a path into `(directory, file)` with `directory + file == path`.
pub(crate) fn split_loose(path: &str) -> (&str, &str) {
    let Some(last_slash_i) = path.rfind('/') else {
        return ("", path);
    };
    if !path.starts_with('/') {
        return ("", path);
    }

    let seg = &path[last_slash_i + 1..];
    // The slash right after the root is never a split point, so the first
    // segment is only tested from its second character on.
    let tested = if last_slash_i == 0 {
        let first_len = seg.chars().next().map_or(0, char::len_utf8);
        &seg[first_len..]
    } else {
        seg
    };

    if looks_like_file(tested) {
        path.split_at(last_slash_i + 1)
    } else {
        (path, "")
    }
}

/// Checks whether a segment ends with a dot followed by one or more non-dot characters.
fn looks_like_file(seg: &str) -> bool {
    match seg.rfind('.') {
        Some(i) => i + 1 < seg.len(),
        None => false,
    }
}

/// Resolves a possibly relative `path` against the directory `base`,
/// producing an absolute path with dot segments removed.
///
/// Excess `..` segments are clamped at the root rather than reported.
///
/// # Examples
///
/// ```
/// use lenient_uri::path::to_abs_path;
///
/// assert_eq!(to_abs_path("/a/b/c", "../../d"), "/a/d");
/// assert_eq!(to_abs_path("/a/", "./b/./c/"), "/a/b/c/");
/// assert_eq!(to_abs_path("/a/", "../../../x"), "/x");
/// assert_eq!(to_abs_path("/a/b", ""), "/a/b/");
/// ```
#[must_use]
pub fn to_abs_path(base: &str, path: &str) -> String {
    let trailing_slash = path.ends_with('/');
    let base_segs: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    // Walk backwards so that every ".." cancels the nearest real segment
    // before it, deferring the rest to the base.
    let mut ups = 0;
    let mut kept = Vec::new();
    for seg in path.split('/').rev() {
        match seg {
            "" | "." => {}
            ".." => ups += 1,
            _ if ups > 0 => ups -= 1,
            _ => kept.push(seg),
        }
    }
    kept.reverse();

    let mut out = String::with_capacity(base.len() + path.len() + 2);
    if base_segs.len() > ups {
        out.push('/');
        out.push_str(&base_segs[..base_segs.len() - ups].join("/"));
        out.push('/');
    } else {
        out.push('/');
    }
    out.push_str(&kept.join("/"));

    if trailing_slash && !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Computes the shortest relative path from the directory of `base`
/// to the absolute path `path`.
///
/// The directory of `base` is everything before its last "/", so both
/// `"/dir/"` and `"/dir/index.html"` stand for the directory `/dir`.
/// When the two paths share no leading segment, as when only one of them
/// is absolute, `path` is returned unchanged.
///
/// # Examples
///
/// ```
/// use lenient_uri::path::to_rel_path;
///
/// assert_eq!(to_rel_path("/dir/", "/dir/sub/file.htm"), "sub/file.htm");
/// assert_eq!(to_rel_path("/a/b/c.html", "/a/d/e.html"), "../d/e.html");
/// assert_eq!(to_rel_path("/a/b/", "/a/"), "../");
/// assert_eq!(to_rel_path("x/y", "/a"), "/a");
/// ```
#[must_use]
pub fn to_rel_path(base: &str, path: &str) -> String {
    let base_dir = &base[..base.rfind('/').unwrap_or(0)];
    let base_segs: Vec<&str> = base_dir.split('/').collect();
    let items: Vec<&str> = path.split('/').collect();

    // Number of leading segments the two share.
    let common = base_segs
        .iter()
        .zip(&items)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return String::from(path);
    }

    let mut out = String::with_capacity(path.len() + 3 * base_segs.len());
    for _ in common..base_segs.len() {
        out.push_str("../");
    }
    out.push_str(&items[common..].join("/"));
    out
}

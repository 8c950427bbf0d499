use crate::{
    path::split_loose,
    table::{Table, AUTHORITY_END, DIGIT, HOST_END, PATH_END, SCHEME, USERINFO_END},
    value::{Authority, HostPort, Parts},
};
use alloc::string::{String, ToString};

/// Checks whether a URI should be kept verbatim rather than decomposed.
///
/// That is the case for a scheme directly followed by two non-slash
/// UTF-16 code units (`mailto:a`, `skype:name`, `tel:12`) and for a bare fragment.
pub(crate) fn is_opaque(s: &str) -> bool {
    if s.starts_with('#') {
        return true;
    }
    let n = SCHEME.span(s.as_bytes());
    if n == 0 || s.as_bytes().get(n) != Some(&b':') {
        return false;
    }
    // Two UTF-16 code units, so a single astral character counts twice.
    let mut units = 0;
    for c in s[n + 1..].chars() {
        if c == '/' {
            return false;
        }
        units += c.len_utf16();
        if units >= 2 {
            return true;
        }
    }
    false
}

/// Checks whether the string starts with an optional scheme followed by `//`.
pub(crate) fn has_hier_prefix(s: &str) -> bool {
    let n = SCHEME.span(s.as_bytes());
    let rem = &s[n..];
    rem.strip_prefix(':').unwrap_or(rem).starts_with("//")
}

/// Decomposes a string carrying its own scheme and authority.
pub(crate) fn parse(s: &str) -> Parts {
    let mut parser = Parser {
        reader: Reader::new(s),
        out: Parts::default(),
    };
    parser.parse_from_scheme();
    parser.out
}

/// Decomposes a path, query and anchor with a synthetic host under `protocol`.
pub(crate) fn parse_tail(protocol: &str, tail: &str) -> Parts {
    let mut parser = Parser {
        reader: Reader::new(tail),
        out: Parts {
            protocol: protocol.to_string(),
            authority: Authority::Synthetic,
            ..Parts::default()
        },
    };
    parser.parse_from_path();
    parser.out
}

/// Scanner over the permissive URI grammar.
///
/// # Invariants
///
/// `pos <= s.len()`, `pos` is non-decreasing and on a `char` boundary:
/// every span stops at an ASCII byte or at the end of input.
struct Parser<'a> {
    reader: Reader<'a>,
    out: Parts,
}

struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn rem(&self) -> &'a [u8] {
        &self.s.as_bytes()[self.pos..]
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.rem().get(i).copied()
    }

    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.s.len());
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.rem().starts_with(s.as_bytes()) {
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    /// Reads bytes allowed by `table`.
    fn read(&mut self, table: Table) -> &'a str {
        let start = self.pos;
        self.skip(table.span(self.rem()));
        &self.s[start..self.pos]
    }

    /// Reads bytes up to the first one allowed by `table`.
    fn read_until(&mut self, table: Table) -> &'a str {
        let start = self.pos;
        self.skip(table.span_until(self.rem()));
        &self.s[start..self.pos]
    }
}

impl Parser<'_> {
    fn parse_from_scheme(&mut self) {
        let r = &mut self.reader;
        let n = SCHEME.span(r.rem());
        if n > 0 && r.peek(n) == Some(b':') {
            self.out.protocol = r.read(SCHEME).to_string();
            r.skip(1);
        }
        r.read_str("//");
        self.parse_from_authority();
    }

    fn parse_from_authority(&mut self) {
        let r = &mut self.reader;
        let start = r.pos;
        let auth_len = AUTHORITY_END.span_until(r.rem());

        // An "@" only delimits user info inside the authority.
        if let Some(at) = userinfo_len(&r.rem()[..auth_len]) {
            let user_info = &r.s[r.pos..r.pos + at];
            let (user, password) = user_info.split_once(':').unwrap_or((user_info, ""));
            self.out.user = user.to_string();
            self.out.password = password.to_string();
            self.out.user_info = user_info.to_string();
            r.skip(at + 1);
        }

        let host = r.read_until(HOST_END).to_string();
        let port = if r.read_str(":") {
            r.read(DIGIT).to_string()
        } else {
            String::new()
        };

        self.out.raw_authority = r.s[start..r.pos].to_string();
        self.out.authority = Authority::Real(HostPort { host, port });
        self.parse_from_path();
    }

    fn parse_from_path(&mut self) {
        let r = &mut self.reader;
        let path = r.read_until(PATH_END);
        let (directory, file) = split_loose(path);
        self.out.path = path.to_string();
        self.out.directory = directory.to_string();
        self.out.file = file.to_string();

        if r.read_str("?") {
            self.out.query = r.read_until(Table::new(b"#")).to_string();
        }
        if r.read_str("#") {
            let rem = &r.s[r.pos..];
            let end = rem
                .find(&['\r', '\n', '\u{2028}', '\u{2029}'][..])
                .unwrap_or(rem.len());
            self.out.anchor = rem[..end].to_string();
            r.skip(rem.len());
        }
    }
}

/// Returns the index of the "@" ending a `user[:password]` prefix, if any.
fn userinfo_len(auth: &[u8]) -> Option<usize> {
    let mut i = USERINFO_END.span_until(auth);
    if auth.get(i) == Some(&b':') {
        i += 1;
        i += USERINFO_END.span_until(&auth[i..]);
    }
    (auth.get(i) == Some(&b'@')).then_some(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_detection() {
        assert!(is_opaque("mailto:someone@example.com"));
        assert!(is_opaque("skype:name"));
        assert!(is_opaque("#top"));
        assert!(is_opaque("tel:\u{e9}\u{e9}"));
        assert!(is_opaque("tel:\u{1f600}"));
        assert!(!is_opaque("tel:\u{e9}"));
        assert!(!is_opaque("tel:\u{e9}/"));
        assert!(!is_opaque("http://example.com"));
        assert!(!is_opaque("http:/x"));
        assert!(!is_opaque("x:a"));
        assert!(!is_opaque("a.b:cd"));
        assert!(!is_opaque("/a:bc"));
    }

    #[test]
    fn hier_prefix() {
        assert!(has_hier_prefix("http://x"));
        assert!(has_hier_prefix("//x"));
        assert!(has_hier_prefix("ab//x"));
        assert!(has_hier_prefix("://x"));
        assert!(!has_hier_prefix("a.b://x"));
        assert!(!has_hier_prefix("dir/file"));
    }

    #[test]
    fn userinfo() {
        assert_eq!(userinfo_len(b"user:pass@host"), Some(9));
        assert_eq!(userinfo_len(b"user@host"), Some(4));
        assert_eq!(userinfo_len(b"@host"), Some(0));
        assert_eq!(userinfo_len(b"host:80"), None);
        assert_eq!(userinfo_len(b"a:b:c@host"), None);
    }

    #[test]
    fn scan_full() {
        let p = parse("https://u:p@example.com:8080/a/b.html?x=1#frag");
        assert_eq!(p.protocol, "https");
        assert_eq!(p.raw_authority, "u:p@example.com:8080");
        assert_eq!(p.user_info, "u:p");
        assert_eq!(p.user, "u");
        assert_eq!(p.password, "p");
        assert_eq!(
            p.authority,
            Authority::Real(HostPort {
                host: "example.com".into(),
                port: "8080".into()
            })
        );
        assert_eq!(p.path, "/a/b.html");
        assert_eq!(p.directory, "/a/");
        assert_eq!(p.file, "b.html");
        assert_eq!(p.query, "x=1");
        assert_eq!(p.anchor, "frag");
    }

    #[test]
    fn at_sign_in_path_is_not_userinfo() {
        let p = parse("http://host/site/@@view?a@b");
        assert_eq!(p.user_info, "");
        assert_eq!(p.authority.host(), "host");
        assert_eq!(p.path, "/site/@@view");
        assert_eq!(p.query, "a@b");
    }

    #[test]
    fn anchor_stops_at_line_terminator() {
        let p = parse("http://h/#a\nb");
        assert_eq!(p.anchor, "a");
    }

    #[test]
    fn scan_tail() {
        let p = parse_tail("ftp", "/x/y.txt#z");
        assert_eq!(p.protocol, "ftp");
        assert!(p.authority.is_synthetic());
        assert_eq!(p.raw_authority, "");
        assert_eq!(p.path, "/x/y.txt");
        assert_eq!(p.file, "y.txt");
        assert_eq!(p.anchor, "z");
    }
}

//! Byte class tables used by the scanner.
//!
//! The classes follow the permissive grammar of legacy browser URL handling
//! rather than the ABNF of RFC 3986. Only ASCII bytes can be members of a table;
//! non-ASCII bytes are never allowed, so reading "until a delimiter" happily
//! walks over UTF-8 sequences.

/// A table specifying a set of ASCII bytes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    pub(crate) const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII byte");
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    pub(crate) const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    #[inline]
    pub(crate) const fn allows(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Returns the length of the longest prefix of `s` made of allowed bytes.
    #[inline]
    pub(crate) fn span(self, s: &[u8]) -> usize {
        s.iter().position(|&x| !self.allows(x)).unwrap_or(s.len())
    }

    /// Returns the length of the longest prefix of `s` free of allowed bytes.
    #[inline]
    pub(crate) fn span_until(self, s: &[u8]) -> usize {
        s.iter().position(|&x| self.allows(x)).unwrap_or(s.len())
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

pub(crate) const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

pub(crate) const DIGIT: Table = new(b"0123456789");

pub(crate) const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// Word characters plus `-`, i.e. `[\w-]`.
pub(crate) const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"_-"));

/// Bytes ending the authority.
pub(crate) const AUTHORITY_END: Table = new(b"/?#");

/// Bytes ending a user name or password.
pub(crate) const USERINFO_END: Table = new(b":@/");

/// Bytes ending the host.
pub(crate) const HOST_END: Table = new(b":/?#");

/// Bytes ending the path.
pub(crate) const PATH_END: Table = new(b"?#");

//! Error types.

/// Detailed cause of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// A "%" not followed by two hexadecimal digits.
    ///
    /// The error index points to the percent character "%".
    InvalidOctet,
    /// Decoded bytes that do not form valid UTF-8.
    ///
    /// The error index points to the first byte of the input that
    /// produced the offending sequence.
    InvalidUtf8,
}

/// An error occurred when percent-decoding a URI component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub(crate) index: usize,
    pub(crate) kind: DecodeErrorKind,
}

impl DecodeError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for DecodeError {}

use crate::{
    error::{DecodeError, DecodeErrorKind},
    value::{Authority, UriValue},
};
use core::fmt;

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            DecodeErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            DecodeErrorKind::InvalidUtf8 => "invalid UTF-8 sequence at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Debug for UriValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            return f.debug_tuple("Opaque").field(&self.as_str()).finish();
        }
        f.debug_struct("UriValue")
            .field("protocol", &self.protocol())
            .field("user_info", &self.user_info())
            .field("authority", &self.authority())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("anchor", &self.anchor())
            .finish()
    }
}

impl fmt::Display for UriValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())?;
        match self.port() {
            "" => Ok(()),
            port => write!(f, ":{port}"),
        }
    }
}

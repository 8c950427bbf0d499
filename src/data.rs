//! `data:` URIs.

use crate::{error::DecodeError, pct};
use alloc::string::{String, ToString};

/// The media type and payload of a `data:` URI.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DataUri {
    /// The media type, e.g. `image/png`, if the header names one.
    pub mime_type: Option<String>,
    /// Everything after the first comma, percent-decoded; empty without a comma.
    pub data: String,
}

/// Splits a `data:` URI into its media type and payload.
///
/// The whole URI is percent-decoded first. The media type is the text
/// following `data:` in the header (before the first comma) up to the first `;`.
/// The payload is returned as is: base64 payloads stay encoded.
///
/// # Errors
///
/// Returns `Err` if percent-decoding fails. See [`pct::decode`].
///
/// # Examples
///
/// ```
/// use lenient_uri::data::parse_data_uri;
///
/// let uri = parse_data_uri("data:text/plain,hello")?;
/// assert_eq!(uri.mime_type.as_deref(), Some("text/plain"));
/// assert_eq!(uri.data, "hello");
///
/// let uri = parse_data_uri("data:image/png;base64,iVBORw0K")?;
/// assert_eq!(uri.mime_type.as_deref(), Some("image/png"));
/// assert_eq!(uri.data, "iVBORw0K");
/// # Ok::<_, lenient_uri::DecodeError>(())
/// ```
pub fn parse_data_uri(uri: &str) -> Result<DataUri, DecodeError> {
    let decoded = pct::decode(uri)?;
    let (header, data) = decoded.split_once(',').unwrap_or((&*decoded, ""));

    let mime_type = header
        .match_indices("data:")
        .map(|(i, m)| {
            let rest = &header[i + m.len()..];
            &rest[..rest.find(';').unwrap_or(rest.len())]
        })
        .find(|ty| !ty.is_empty())
        .map(ToString::to_string);

    Ok(DataUri {
        mime_type,
        data: data.to_string(),
    })
}

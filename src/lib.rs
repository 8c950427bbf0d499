#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A permissive URI value type in the manner of browser-side editors.
//!
//! [`UriValue`] accepts any string, never fails to parse, and decomposes what it
//! can into protocol, authority, path, query and anchor. Host-less input is
//! resolved against a base URI or a [`DocumentLocation`], and the crate offers the
//! path arithmetic to go back and forth between absolute and relative forms:
//!
//! - [`UriValue::to_absolute`] and [`UriValue::to_relative`] convert URIs
//!   against a base.
//! - [`path::to_abs_path`] and [`path::to_rel_path`] do the same for bare paths.
//! - [`UriValue::is_same_origin`] compares origins with default ports in mind.
//! - [`parse_data_uri`] splits a `data:` URI into media type and payload.
//!
//! The parser follows the forgiving grammar of legacy web content
//! rather than RFC 3986. Use it to rewrite links in user-authored markup;
//! reach for a strict parser when validating input.
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support, including [`Error`] implementations.
//!
//! - `impl-error`: Implements [`Error`] for error types without `std`.
//!   This requires Rust 1.81 or later.
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for [`UriValue`],
//!   which (de)serializes as a string.
//!
//! [`Error`]: core::error::Error

extern crate alloc;

mod fmt;
mod parser;
mod resolve;
mod table;
mod value;

pub mod data;
pub mod error;
pub mod location;
pub mod origin;
pub mod path;
pub mod pct;

pub use data::{parse_data_uri, DataUri};
pub use error::{DecodeError, DecodeErrorKind};
pub use location::{get_document_base_url, DocumentLocation};
pub use path::Path;
pub use value::{Authority, HostPort, UriSettings, UriValue};

#[cfg(all(feature = "impl-error", feature = "std"))]
use std::error::Error;

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;

//! Response header extraction.
//!
//! Several operations return their result only in a response header (a job id,
//! an archive id). The parsers here take anything implementing [`HeaderSource`]
//! so they work on a live [`reqwest::Response`] or a bare [`HeaderMap`].

use reqwest::header::{HeaderMap, HeaderValue};
use std::str;
use thiserror::Error;

/// Errors raised while interpreting an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// A header the operation depends on was absent.
    #[error("{message}")]
    MissingHeader {
        header: &'static str,
        message: &'static str,
    },
    /// The header was received but its value is not valid UTF-8.
    #[error("header {header} is present but not valid UTF-8")]
    InvalidHeader { header: &'static str },
}

/// Read access to response headers.
pub trait HeaderSource {
    /// Raw bytes of the first value of `name`, matched case-insensitively.
    fn first_header_bytes(&self, name: &str) -> Option<&[u8]>;

    /// First value of `name` as text.
    ///
    /// `None` when the header is absent or its value is not valid UTF-8.
    fn first_header(&self, name: &str) -> Option<&str> {
        self.first_header_bytes(name)
            .and_then(|bytes| str::from_utf8(bytes).ok())
    }
}

impl HeaderSource for HeaderMap {
    fn first_header_bytes(&self, name: &str) -> Option<&[u8]> {
        self.get(name).map(HeaderValue::as_bytes)
    }
}

impl HeaderSource for reqwest::Response {
    fn first_header_bytes(&self, name: &str) -> Option<&[u8]> {
        self.headers().first_header_bytes(name)
    }
}

/// Extract a header the caller cannot proceed without.
///
/// `message` becomes the error text when the header is missing. A header that
/// is present but not valid UTF-8 is [`HttpError::InvalidHeader`]. No retry is
/// attempted here.
pub fn required_header<S: HeaderSource + ?Sized>(
    source: &S,
    header: &'static str,
    message: &'static str,
) -> Result<String, HttpError> {
    let bytes = source
        .first_header_bytes(header)
        .ok_or(HttpError::MissingHeader { header, message })?;
    match str::from_utf8(bytes) {
        Ok(value) => Ok(value.to_string()),
        Err(e) => {
            tracing::debug!(%e, header, "Header value is not valid UTF-8");
            Err(HttpError::InvalidHeader { header })
        }
    }
}

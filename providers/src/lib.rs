//! Per-service response parsers and request options.
//!
//! # Architecture
//!
//! The crate is organized around two small seams shared by every service:
//!
//! - [`response::HeaderSource`] - Read access to response headers, implemented for
//!   [`reqwest::Response`] and [`reqwest::header::HeaderMap`]
//! - [`options::FormParameters`] - Request options that serialize into ordered form
//!   parameters, applied to a [`reqwest::RequestBuilder`] with [`options::apply_form`]
//!
//! Service modules build on those:
//!
//! - [`elb`] - Load balancer list options
//! - [`glacier`] - Required-header parsers (job id, archive id, multipart upload id)
//! - [`rds`] - Database instance list options
//!
//! [`cache::RegionScopedCache`] keys resources by [`RegionScopedKey`] so that
//! identically-named resources in different regions do not collide.
//!
//! # Error Handling
//!
//! Nothing here retries. A missing required header is an [`HttpError`] returned to
//! the caller; retry policy belongs to the transport layer.

pub mod cache;
pub mod elb;
pub mod glacier;
pub mod options;
pub mod rds;
pub mod response;

pub use cirrus_types;
pub use cirrus_types::{RegionKeyError, RegionScopedKey, Service};
pub use response::{HeaderSource, HttpError};

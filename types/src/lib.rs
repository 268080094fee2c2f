//! Core domain types for Cirrus.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the client.

mod region;
mod service;

pub use region::{DELIMITER, RegionKeyError, RegionScopedKey};
pub use service::{Service, ServiceParseError};

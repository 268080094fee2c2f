//! Region-scoped resource identifiers.
//!
//! Resource names (load balancers, vaults, database instances) are only unique
//! within a region. [`RegionScopedKey`] pairs the two so identically-named
//! resources in different regions stay distinct when used as map keys, and
//! encodes the pair as a single `region/name` token for APIs that only accept
//! one string.
//!
//! # Delimiter handling
//!
//! The token format has no escaping. [`RegionScopedKey::new`] accepts any
//! strings, so a field containing `/` produces a token that
//! [`RegionScopedKey::decode`] rejects. Use [`RegionScopedKey::new_strict`]
//! when the round trip must be guaranteed.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reserved separator between region and name in an encoded token.
pub const DELIMITER: char = '/';

/// Invalid input to a [`RegionScopedKey`] constructor or decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionKeyError {
    #[error("{field} must not be null")]
    Missing { field: &'static str },
    #[error("token {token:?} must be in format regionId/name")]
    Malformed { token: String },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must not contain the reserved delimiter '/' (got {value:?})")]
    ReservedDelimiter { field: &'static str, value: String },
}

/// A resource name qualified by the region it lives in.
///
/// Equality and hashing cover both fields.
///
/// ```rust
/// use cirrus_types::RegionScopedKey;
///
/// let key = RegionScopedKey::new("us-east-1", "my-elb");
/// assert_eq!(key.encode(), "us-east-1/my-elb");
/// assert_eq!(RegionScopedKey::decode("us-east-1/my-elb").unwrap(), key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct RegionScopedKey {
    region: String,
    name: String,
}

impl RegionScopedKey {
    /// Pair a region with a resource name.
    ///
    /// Empty fields and fields containing [`DELIMITER`] are accepted for
    /// compatibility with tokens minted elsewhere; neither survives
    /// [`encode`](Self::encode) followed by [`decode`](Self::decode).
    #[must_use]
    pub fn new(region: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            name: name.into(),
        }
    }

    /// Like [`new`](Self::new), but rejects empty fields and fields containing
    /// the delimiter, so the resulting key always round-trips.
    pub fn new_strict(
        region: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, RegionKeyError> {
        let region = checked_field("region", region.into())?;
        let name = checked_field("name", name.into())?;
        Ok(Self { region, name })
    }

    /// Build a key from fields that may be absent, e.g. optional fields of a
    /// deserialized API response.
    pub fn from_fields(
        region: Option<String>,
        name: Option<String>,
    ) -> Result<Self, RegionKeyError> {
        let region = region.ok_or(RegionKeyError::Missing { field: "region" })?;
        let name = name.ok_or(RegionKeyError::Missing { field: "name" })?;
        Ok(Self { region, name })
    }

    /// Parse a `region/name` token.
    ///
    /// The token must contain exactly one delimiter with a non-empty part on
    /// each side. `a/b/c` is rejected rather than split on the first slash.
    pub fn decode(token: &str) -> Result<Self, RegionKeyError> {
        let malformed = || RegionKeyError::Malformed {
            token: token.to_string(),
        };

        let mut parts = token.split(DELIMITER);
        let (Some(region), Some(name), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        if region.is_empty() || name.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(region, name))
    }

    /// [`decode`](Self::decode) for a token that may be absent.
    pub fn decode_optional(token: Option<&str>) -> Result<Self, RegionKeyError> {
        let token = token.ok_or(RegionKeyError::Missing { field: "token" })?;
        Self::decode(token)
    }

    /// Encode as `region/name`. No escaping is applied.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut token = String::with_capacity(self.region.len() + 1 + self.name.len());
        token.push_str(&self.region);
        token.push(DELIMITER);
        token.push_str(&self.name);
        token
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.region, self.name)
    }
}

fn checked_field(field: &'static str, value: String) -> Result<String, RegionKeyError> {
    if value.is_empty() {
        return Err(RegionKeyError::Empty { field });
    }
    if value.contains(DELIMITER) {
        return Err(RegionKeyError::ReservedDelimiter { field, value });
    }
    Ok(value)
}

/// Human-readable form for logs and error messages. Not the wire token.
impl fmt::Display for RegionScopedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[region={}, name={}]", self.region, self.name)
    }
}

impl FromStr for RegionScopedKey {
    type Err = RegionKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for RegionScopedKey {
    type Error = RegionKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl TryFrom<String> for RegionScopedKey {
    type Error = RegionKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::decode(&value)
    }
}

/// Serializes as the encoded token. Keys whose token would not decode back
/// (empty fields, embedded delimiter) fail here rather than on read.
impl Serialize for RegionScopedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let token = self.encode();
        Self::decode(&token).map_err(S::Error::custom)?;
        serializer.serialize_str(&token)
    }
}

impl From<RegionScopedKey> for String {
    fn from(value: RegionScopedKey) -> Self {
        value.encode()
    }
}

//! Relational database service (RDS) request options.

use crate::options::{FormParameters, NameFilter};

pub const INSTANCE_NAMES_PREFIX: &str = "InstanceNames";

/// Options for listing database instances.
///
/// Immutable: each method consumes the value and returns the updated one, so a
/// configured value can be cloned and shared between callers.
///
/// ```rust
/// use cirrus_providers::options::FormParameters;
/// use cirrus_providers::rds::ListInstancesOptions;
///
/// let options = ListInstancesOptions::for_name("primary").after_marker("MARKER");
/// assert_eq!(
///     options.form_parameters(),
///     vec![
///         ("Marker".to_string(), "MARKER".to_string()),
///         ("InstanceNames.member.1".to_string(), "primary".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListInstancesOptions {
    filter: NameFilter,
}

impl ListInstancesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn after_marker_only(marker: impl Into<String>) -> Self {
        Self::new().after_marker(marker)
    }

    #[must_use]
    pub fn for_name(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    #[must_use]
    pub fn for_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with_names(names)
    }

    /// Continue a truncated listing from the `Marker` of the previous response.
    #[must_use]
    pub fn after_marker(self, marker: impl Into<String>) -> Self {
        Self {
            filter: self.filter.after_marker(marker),
        }
    }

    /// Restrict to instances with this name.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            filter: self.filter.with_name(name),
        }
    }

    #[must_use]
    pub fn with_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: self.filter.with_names(names),
        }
    }

    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.filter.marker()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        self.filter.names()
    }
}

impl FormParameters for ListInstancesOptions {
    fn form_parameters(&self) -> Vec<(String, String)> {
        self.filter.to_form_parameters(INSTANCE_NAMES_PREFIX)
    }
}

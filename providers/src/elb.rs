//! Load balancer service (ELB) request options.
//!
//! Load balancer names are unique per region only; pair them with their region
//! through [`RegionScopedKey`] before caching (see [`crate::cache`]).

use crate::options::{FormParameters, NameFilter};
use cirrus_types::RegionScopedKey;

pub const LOAD_BALANCER_NAMES_PREFIX: &str = "LoadBalancerNames";

/// Options for listing load balancers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLoadBalancersOptions {
    filter: NameFilter,
}

impl ListLoadBalancersOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_name(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    #[must_use]
    pub fn after_marker(self, marker: impl Into<String>) -> Self {
        Self {
            filter: self.filter.after_marker(marker),
        }
    }

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

    /// Keys for the requested names as seen from `region`.
    #[must_use]
    pub fn scoped_keys(&self, region: &str) -> Vec<RegionScopedKey> {
        self.names()
            .iter()
            .map(|name| RegionScopedKey::new(region, name.as_str()))
            .collect()
    }
}

impl FormParameters for ListLoadBalancersOptions {
    fn form_parameters(&self) -> Vec<(String, String)> {
        self.filter.to_form_parameters(LOAD_BALANCER_NAMES_PREFIX)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cloud services with client support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Elastic load balancing.
    Elb,
    /// Archival storage.
    Glacier,
    /// Relational database service.
    Rds,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service {0:?} (expected elb, glacier or rds)")]
pub struct ServiceParseError(pub String);

impl Service {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Service::Elb => "elb",
            Service::Glacier => "glacier",
            Service::Rds => "rds",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Service::Elb => "Elastic Load Balancing",
            Service::Glacier => "Glacier",
            Service::Rds => "Relational Database Service",
        }
    }

    /// Hostname prefix of the regional endpoint.
    #[must_use]
    pub const fn endpoint_prefix(self) -> &'static str {
        match self {
            Service::Elb => "elasticloadbalancing",
            Service::Glacier => "glacier",
            Service::Rds => "rds",
        }
    }

    /// Regional endpoint used when no override is configured.
    #[must_use]
    pub fn default_endpoint(self, region: &str) -> String {
        format!("https://{}.{region}.amazonaws.com", self.endpoint_prefix())
    }

    /// Parse a service from its short name or a common alias.
    pub fn parse(s: &str) -> Result<Self, ServiceParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elb" | "elasticloadbalancing" | "loadbalancer" => Ok(Service::Elb),
            "glacier" | "archive" => Ok(Service::Glacier),
            "rds" | "database" => Ok(Service::Rds),
            _ => Err(ServiceParseError(s.to_string())),
        }
    }

    #[must_use]
    pub fn all() -> &'static [Service] {
        &[Service::Elb, Service::Glacier, Service::Rds]
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = ServiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

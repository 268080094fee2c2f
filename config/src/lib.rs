//! Configuration loading for Cirrus.
//!
//! The config lives at `~/.cirrus/config.toml` unless `CIRRUS_CONFIG` points
//! elsewhere:
//!
//! ```toml
//! [defaults]
//! region = "us-east-1"
//!
//! [rds]
//! region = "eu-west-1"
//! endpoint = "${RDS_ENDPOINT}"
//! ```
//!
//! String values may reference environment variables as `${NAME}`.

use cirrus_types::Service;
use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CIRRUS_CONFIG";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CirrusConfig {
    pub defaults: Option<DefaultsConfig>,
    pub elb: Option<ServiceConfig>,
    pub glacier: Option<ServiceConfig>,
    pub rds: Option<ServiceConfig>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Region used when a service table does not set its own.
    pub region: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    pub region: Option<String>,
    /// Full endpoint URL, replacing the service's regional default.
    pub endpoint: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Replace `${NAME}` with the value of environment variable `NAME`.
///
/// Unset variables expand to the empty string. An unterminated `${` and an
/// empty `${}` are left as written.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(0) => {
                out.push_str("${}");
                rest = &after[1..];
            }
            Some(end) => {
                out.push_str(&env::var(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

fn expand_opt(value: Option<&String>) -> Option<String> {
    value
        .map(|v| expand_env_vars(v))
        .filter(|v| !v.trim().is_empty())
}

impl CirrusConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn service(&self, service: Service) -> Option<&ServiceConfig> {
        match service {
            Service::Elb => self.elb.as_ref(),
            Service::Glacier => self.glacier.as_ref(),
            Service::Rds => self.rds.as_ref(),
        }
    }

    /// Service region, falling back to `[defaults] region`.
    #[must_use]
    pub fn region_for(&self, service: Service) -> Option<String> {
        let service_region = self
            .service(service)
            .and_then(|cfg| expand_opt(cfg.region.as_ref()));
        service_region.or_else(|| {
            self.defaults
                .as_ref()
                .and_then(|defaults| expand_opt(defaults.region.as_ref()))
        })
    }

    /// Configured endpoint override, or the service's regional default.
    #[must_use]
    pub fn endpoint_for(&self, service: Service, region: &str) -> String {
        self.service(service)
            .and_then(|cfg| expand_opt(cfg.endpoint.as_ref()))
            .unwrap_or_else(|| service.default_endpoint(region))
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".cirrus").join("config.toml"))
}

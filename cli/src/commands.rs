use anyhow::{Result, anyhow};

use cirrus_config::CirrusConfig;
use cirrus_providers::elb::ListLoadBalancersOptions;
use cirrus_providers::options::FormParameters;
use cirrus_providers::rds::ListInstancesOptions;
use cirrus_types::{RegionScopedKey, Service};

pub(crate) fn encode_key(region: String, name: String, strict: bool) -> Result<String> {
    let key = if strict {
        RegionScopedKey::new_strict(region, name)?
    } else {
        let key = RegionScopedKey::new(region, name);
        if RegionScopedKey::decode(&key.encode()).is_err() {
            tracing::warn!(%key, "Encoded token will not decode back to this key");
        }
        key
    };
    Ok(key.encode())
}

pub(crate) fn decode_key(token: &str) -> Result<String> {
    let key = RegionScopedKey::decode(token)?;
    Ok(format!("region={}\nname={}", key.region(), key.name()))
}

fn render_form(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn instances_form(marker: Option<String>, names: Vec<String>) -> String {
    let mut options = ListInstancesOptions::for_names(names);
    if let Some(marker) = marker {
        options = options.after_marker(marker);
    }
    render_form(&options.form_parameters())
}

pub(crate) fn load_balancers_form(marker: Option<String>, names: Vec<String>) -> String {
    let mut options = ListLoadBalancersOptions::new().with_names(names);
    if let Some(marker) = marker {
        options = options.after_marker(marker);
    }
    render_form(&options.form_parameters())
}

pub(crate) fn endpoint(
    config: &CirrusConfig,
    service: Service,
    region: Option<String>,
) -> Result<String> {
    let region = region
        .filter(|r| !r.trim().is_empty())
        .or_else(|| config.region_for(service))
        .ok_or_else(|| {
            anyhow!(
                "no region for {service}: pass --region or set [defaults] region in the config"
            )
        })?;
    Ok(config.endpoint_for(service, &region))
}

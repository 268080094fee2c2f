//! Query-style request options.
//!
//! List operations take an optional pagination marker plus a set of names to
//! filter on. Names are sent as 1-based indexed members
//! (`InstanceNames.member.1`, `InstanceNames.member.2`, ...) in the order they
//! were added.

use reqwest::RequestBuilder;

/// Form parameter carrying the pagination marker.
pub const MARKER_PARAM: &str = "Marker";

/// Anything that serializes into ordered key/value form parameters.
pub trait FormParameters {
    fn form_parameters(&self) -> Vec<(String, String)>;
}

/// Attach `Action=<action>` followed by `options` as a urlencoded form body.
pub fn apply_form<O: FormParameters + ?Sized>(
    builder: RequestBuilder,
    action: &str,
    options: &O,
) -> RequestBuilder {
    let mut params = Vec::new();
    params.push(("Action".to_string(), action.to_string()));
    params.extend(options.form_parameters());
    builder.form(&params)
}

/// `<prefix>.member.<i>` pairs, indexed from 1.
pub fn indexed_members<'a, I>(prefix: &str, values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a String>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| (format!("{prefix}.member.{}", i + 1), value.clone()))
        .collect()
}

/// Marker plus an insertion-ordered, duplicate-free set of names.
///
/// Shared by the per-service list options, which differ only in the member
/// prefix used for the names. Equality compares the names as a set; insertion
/// order only affects the member indices on the wire.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    marker: Option<String>,
    names: Vec<String>,
}

impl PartialEq for NameFilter {
    fn eq(&self, other: &Self) -> bool {
        // names are duplicate-free, so equal length plus containment is set equality
        self.marker == other.marker
            && self.names.len() == other.names.len()
            && self.names.iter().all(|name| other.names.contains(name))
    }
}

impl Eq for NameFilter {}

impl NameFilter {
    #[must_use]
    pub fn after_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Add a name. Re-adding an existing name keeps its original position.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    /// Replace the whole name set.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.clear();
        names
            .into_iter()
            .fold(self, |filter, name| filter.with_name(name))
    }

    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn to_form_parameters(&self, member_prefix: &str) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.names.len() + 1);
        if let Some(marker) = &self.marker {
            params.push((MARKER_PARAM.to_string(), marker.clone()));
        }
        params.extend(indexed_members(member_prefix, &self.names));
        params
    }
}

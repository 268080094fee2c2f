//! Client-side cache of region-scoped resources.

use cirrus_types::{RegionKeyError, RegionScopedKey};
use std::collections::HashMap;

/// Resources keyed by region and name, so `web` in `us-east-1` and `web` in
/// `eu-west-1` are cached separately.
#[derive(Debug, Clone)]
pub struct RegionScopedCache<V> {
    entries: HashMap<RegionScopedKey, V>,
}

impl<V> Default for RegionScopedCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> RegionScopedCache<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous value.
    pub fn insert(&mut self, key: RegionScopedKey, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &RegionScopedKey) -> Option<&V> {
        self.entries.get(key)
    }

    /// Look up by encoded `region/name` token.
    pub fn get_token(&self, token: &str) -> Result<Option<&V>, RegionKeyError> {
        let key = RegionScopedKey::decode(token)?;
        Ok(self.entries.get(&key))
    }

    pub fn remove(&mut self, key: &RegionScopedKey) -> Option<V> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in `region`, in no particular order.
    pub fn in_region<'a>(
        &'a self,
        region: &'a str,
    ) -> impl Iterator<Item = (&'a RegionScopedKey, &'a V)> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key.region() == region)
    }
}

use crate::value::ConfigValue;
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// DeclaredConfig
///
/// The flat, user-facing snapshot of desired resource state: an ordered map
/// from field identifier to declared value. One snapshot is taken per
/// lifecycle invocation; iteration order is deterministic.
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, IntoIterator, PartialEq, Serialize,
)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct DeclaredConfig(BTreeMap<String, ConfigValue>);

impl DeclaredConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Write one declared value, replacing any previous entry.
    pub fn set(&mut self, ident: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(ident.into(), value.into());
    }

    /// Whether the field was mentioned at all, empty values included.
    /// This is the skip test for create/update dispatch.
    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.0.contains_key(ident)
    }

    /// Whether the field is present with a non-empty value.
    /// This is the presence test for the mutual-exclusion check.
    #[must_use]
    pub fn has_value(&self, ident: &str) -> bool {
        self.0.get(ident).is_some_and(|value| !value.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for DeclaredConfig
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(ident, value)| (ident.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_distinguishes_absent_empty_and_set() {
        let mut config = DeclaredConfig::new();
        config.set("draining_timeout", 120);
        config.set("user_data", ConfigValue::Null);

        assert!(config.contains("draining_timeout"));
        assert!(config.has_value("draining_timeout"));

        // Explicit null: mentioned, but empty for exclusion purposes.
        assert!(config.contains("user_data"));
        assert!(!config.has_value("user_data"));

        assert!(!config.contains("od_count"));
        assert!(!config.has_value("od_count"));
    }

    #[test]
    fn set_replaces_prior_entries() {
        let mut config = DeclaredConfig::new();
        config.set("od_count", 1);
        config.set("od_count", 3);

        assert_eq!(config.get("od_count").and_then(ConfigValue::as_i64), Some(3));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let config: DeclaredConfig = [
            ("low_priority_percentage", ConfigValue::from(50.0)),
            ("name", ConfigValue::from("eg-baseline")),
        ]
        .into_iter()
        .collect();

        let encoded = serde_json::to_string(&config).expect("snapshot should serialize");
        assert_eq!(
            encoded,
            r#"{"low_priority_percentage":50.0,"name":"eg-baseline"}"#
        );

        let decoded: DeclaredConfig =
            serde_json::from_str(&encoded).expect("snapshot should deserialize");
        assert_eq!(decoded, config);
    }
}

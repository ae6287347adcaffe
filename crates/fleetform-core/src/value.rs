use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// ConfigValue
///
/// Declared-side value tree for one configuration attribute.
///
/// `Null` means the attribute carries an explicit empty value; absence from
/// the snapshot altogether is expressed at the [`DeclaredConfig`] level.
/// Structural equality over this representation is the comparison used by
/// the immutability check.
///
/// [`DeclaredConfig`]: crate::config::DeclaredConfig
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Block(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Emptiness rule used by the mutual-exclusion presence test: `Null`,
    /// the empty string, and empty collections all count as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Block(entries) => entries.is_empty(),
            Self::Bool(_) | Self::Int(_) | Self::Float(_) => false,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric accessor; integers widen losslessly enough for declared-side
    /// percentages and counts.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            #[expect(clippy::cast_precision_loss)]
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_block(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Block(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for ConfigValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, Self>> for ConfigValue {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Block(value)
    }
}

impl<T> From<Option<T>> for ConfigValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn emptiness_follows_the_presence_rule() {
        assert!(ConfigValue::Null.is_empty());
        assert!(ConfigValue::from("").is_empty());
        assert!(ConfigValue::List(vec![]).is_empty());
        assert!(ConfigValue::Block(BTreeMap::new()).is_empty());

        assert!(!ConfigValue::from(false).is_empty());
        assert!(!ConfigValue::from(0).is_empty());
        assert!(!ConfigValue::from(0.0).is_empty());
        assert!(!ConfigValue::from("x").is_empty());
    }

    #[test]
    fn accessors_are_shape_strict() {
        let value = ConfigValue::from(42);
        assert_eq!(value.as_i64(), Some(42));
        assert_eq!(value.as_f64(), Some(42.0));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_bool(), None);

        let block = ConfigValue::Block(BTreeMap::from([(
            "inner".to_string(),
            ConfigValue::from("v"),
        )]));
        let entries = block.as_block().expect("block accessor should match");
        assert_eq!(entries.get("inner").and_then(ConfigValue::as_str), Some("v"));
    }

    #[test]
    fn wire_form_is_plain_json() {
        let value = ConfigValue::Block(BTreeMap::from([
            ("count".to_string(), ConfigValue::from(2)),
            ("name".to_string(), ConfigValue::from("eg-baseline")),
        ]));

        let encoded = serde_json::to_string(&value).expect("value should serialize");
        assert_eq!(encoded, r#"{"count":2,"name":"eg-baseline"}"#);

        let decoded: ConfigValue =
            serde_json::from_str(&encoded).expect("value should deserialize");
        assert_eq!(decoded, value);
    }

    fn arb_scalar() -> impl Strategy<Value = ConfigValue> {
        prop_oneof![
            Just(ConfigValue::Null),
            any::<bool>().prop_map(ConfigValue::from),
            any::<i64>().prop_map(ConfigValue::from),
            "[a-z0-9_]{0,12}".prop_map(ConfigValue::from),
        ]
    }

    proptest! {
        #[test]
        fn scalar_wire_round_trip(value in arb_scalar()) {
            let encoded = serde_json::to_string(&value).expect("value should serialize");
            let decoded: ConfigValue =
                serde_json::from_str(&encoded).expect("value should deserialize");
            prop_assert_eq!(decoded, value);
        }
    }
}

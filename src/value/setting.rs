//! Tri-state properties that accept the `none` keyword.

use super::{InvalidValue, Scalar};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The keyword that explicitly disables a [`Setting`].
pub const NONE_KEYWORD: &str = "none";

/// A property that may be unset, explicitly `none`, or set to a value.
///
/// `ControlPath none` and a missing `ControlPath` mean the same thing to ssh,
/// so [`Setting::NotSet`] and [`Setting::None`] compare equal. They still
/// differ during resolution: an explicit `none` in an earlier block wins over
/// a value from a later one, while `NotSet` lets the later value through.
#[derive(Debug, Clone, Default)]
pub enum Setting<T> {
    #[default]
    NotSet,
    /// Written as `none` in the config.
    None,
    Value(T),
}

impl<T> Setting<T> {
    /// The value, if one is set.
    pub fn value(&self) -> Option<&T> {
        match self {
            Setting::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_not_set(&self) -> bool {
        matches!(self, Setting::NotSet)
    }

    /// True only for the literal `none` keyword.
    pub fn is_explicit_none(&self) -> bool {
        matches!(self, Setting::None)
    }
}

impl<T: Scalar> Setting<T> {
    /// Parse raw config text; `none` becomes [`Setting::None`].
    pub fn from_raw(raw: &str) -> Result<Self, InvalidValue> {
        if raw == NONE_KEYWORD {
            Ok(Setting::None)
        } else {
            T::from_raw(raw).map(Setting::Value)
        }
    }

    /// Raw config text, or `None` when unset.
    pub fn to_raw(&self) -> Option<String> {
        match self {
            Setting::NotSet => None,
            Setting::None => Some(NONE_KEYWORD.to_string()),
            Setting::Value(value) => Some(value.to_raw()),
        }
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Setting::NotSet, Setting::Value)
    }
}

impl<T: PartialEq> PartialEq for Setting<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T: Eq> Eq for Setting<T> {}

impl<T: Scalar> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_raw() {
            Some(raw) => serializer.serialize_str(&raw),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Setting<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(raw) => Setting::from_raw(&raw).map_err(serde::de::Error::custom),
            None => Ok(Setting::NotSet),
        }
    }
}

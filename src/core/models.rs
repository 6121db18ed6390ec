use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::locale_compare;

/// Wire representation: preference name to raw value. Order is irrelevant.
pub type PreferenceMap = HashMap<String, Value>;

/// Display representation, sorted by name.
pub type PreferenceList = Vec<Preference>;

/// A single named preference. The value is kept in its raw wire form; read it
/// through [`Preference::enabled`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub name: String,
    pub value: Value,
}

impl Preference {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        coerce_bool(&self.value)
    }
}

/// Only `true` and the string `"true"` count as enabled.
///
/// Preferences are booleans only for now; any other representation reads as
/// `false`.
#[must_use]
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}

/// Body of `GET /users/{name}`. Only the preferences are read.
#[derive(Debug, Default, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub preferences: Option<PreferenceMap>,
}

/// Body of `PUT /users/{name}/preferences`.
#[derive(Debug, Serialize)]
pub struct PreferencesUpdate<'a> {
    pub preferences: &'a PreferenceMap,
}

/// Convert a wire map into a list sorted by name. A missing map is empty.
#[must_use]
pub fn map_to_list(map: Option<&PreferenceMap>) -> PreferenceList {
    let Some(map) = map else {
        return Vec::new();
    };

    let mut list: PreferenceList = map
        .iter()
        .map(|(name, value)| Preference::new(name.clone(), value.clone()))
        .collect();
    list.sort_by(|a, b| locale_compare(&a.name, &b.name));
    list
}

/// Convert a list into a wire map, coercing every value to a boolean.
///
/// If a name appears more than once, the last occurrence wins.
#[must_use]
pub fn list_to_map(list: &[Preference]) -> PreferenceMap {
    list.iter()
        .map(|p| (p.name.clone(), Value::Bool(p.enabled())))
        .collect()
}

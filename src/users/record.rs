//! User record wire types.
//!
//! Displayed scalars are kept as the JSON values received, so a record with a
//! null, missing or oddly typed field still renders instead of failing the
//! whole batch. Absent keys stay absent and unmodelled keys are kept in
//! `extra` maps, so an export reproduces each record as the API sent it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A displayed scalar: `None` when the key was absent, `Some(Value::Null)`
/// for an explicit `null`.
pub type Field = Option<Value>;

/// One user as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub phone: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub website: Field,
    #[serde(default, skip_serializing_if = "Company::is_absent")]
    pub company: Company,
    #[serde(default, skip_serializing_if = "Address::is_absent")]
    pub address: Address,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Name as display text; empty when absent or null.
    #[must_use]
    pub fn display_name(&self) -> String {
        field_text(self.name.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Field,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Company {
    fn is_absent(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub street: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub suite: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub city: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub zipcode: Field,
    #[serde(default, skip_serializing_if = "Geo::is_absent")]
    pub geo: Geo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    fn is_absent(&self) -> bool {
        self == &Self::default()
    }
}

/// Coordinates are kept as received (the public API sends strings, others
/// send numbers) and rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lat: Field,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lng: Field,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Geo {
    fn is_absent(&self) -> bool {
        self == &Self::default()
    }
}

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Field, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Display text of a field: strings without quotes, absent or null as empty,
/// anything else as JSON.
#[must_use]
pub fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}


#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

//! Profile Model
//!
//! Self-service profile record plus the server-computed completion
//! percentage. The record is fetched, optionally edited, and replaced
//! wholesale by the server's response after a save.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat profile record served by `GET /me/profile`.
///
/// Every data field is optional; absent fields stay absent on the wire
/// so binding them into a form leaves the form's fields untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default)]
    pub completion_percent: u8,

    // basic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,

    // personal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,

    // identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<String>,

    // contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seating_location: Option<String>,

    // payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ifsc_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
}

impl ProfileRecord {
    /// Flatten into a key/value map for form binding. Absent fields
    /// produce no key at all.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// Partial-update payload for `PUT /me/profile`.
///
/// Carries only the fields the user actually filled in; the server
/// merges and recomputes `completion_percent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProfileUpdate {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_absent_on_the_wire() {
        let record = ProfileRecord {
            completion_percent: 40,
            first_name: Some("Jane".into()),
            ..Default::default()
        };
        let map = record.to_map();
        assert_eq!(map.get("first_name"), Some(&Value::String("Jane".into())));
        assert!(!map.contains_key("last_name"));
        assert!(!map.contains_key("bank_account_no"));
    }

    #[test]
    fn ignores_unknown_keys_from_server() {
        let record: ProfileRecord = serde_json::from_str(
            r#"{"completion_percent": 55, "first_name": "Jane", "employee_of_the_month": true}"#,
        )
        .unwrap();
        assert_eq!(record.completion_percent, 55);
        assert_eq!(record.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn update_serializes_flat() {
        let mut fields = Map::new();
        fields.insert("first_name".into(), Value::String("Jane".into()));
        let update = ProfileUpdate::from_map(fields);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"first_name":"Jane"}"#
        );
    }
}

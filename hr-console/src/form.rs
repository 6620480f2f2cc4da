//! Form binder
//!
//! An in-memory model of a named-field form. Binding copies a flat
//! record into matching fields; collection gathers only non-empty
//! values back out as a partial-update payload.

use serde_json::{Map, Value};
use shared::models::ProfileAccess;
use shared::util::{normalize_date, truncate_iso_date};

/// Field receiving the display-only date transform on bind.
const BIRTHDAY_FIELD: &str = "birthday";

/// One named control on a form.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub enabled: bool,
    /// Tab/toggle controls stay enabled even in read-only mode and
    /// never contribute to the save payload.
    pub toggle: bool,
}

/// A form as a value: ordered named fields with enable state.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    fields: Vec<Field>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a data field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: String::new(),
            enabled: true,
            toggle: false,
        });
        self
    }

    /// Add a tab/toggle control.
    pub fn toggle(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: String::new(),
            enabled: true,
            toggle: true,
        });
        self
    }

    /// The profile-completion form: section tabs plus every profile
    /// record field.
    pub fn profile_form() -> Self {
        Self::new()
            .toggle("tab_basic")
            .toggle("tab_personal")
            .toggle("tab_identity")
            .toggle("tab_contact")
            .toggle("tab_payment")
            .field("first_name")
            .field("last_name")
            .field("email")
            .field("personal_phone")
            .field("birthday")
            .field("present_address")
            .field("permanent_address")
            .field("gender")
            .field("marital_status")
            .field("father_name")
            .field("linkedin_url")
            .field("uan")
            .field("pan")
            .field("aadhar")
            .field("personal_email")
            .field("personal_mobile")
            .field("seating_location")
            .field("bank_account_no")
            .field("bank_name")
            .field("ifsc_code")
            .field("account_type")
            .field("payment_mode")
    }

    /// Copy a flat record into matching fields.
    ///
    /// Sets exactly the fields present in both the record's keys and
    /// the form; unknown record keys are ignored and fields absent from
    /// the record are left untouched. Null becomes the empty string,
    /// non-strings are coerced via their display form, and `birthday`
    /// gets the idempotent ISO-date truncation.
    pub fn bind(&mut self, record: &Map<String, Value>) {
        for field in &mut self.fields {
            let Some(value) = record.get(&field.name) else {
                continue;
            };
            let mut text = coerce(value);
            if field.name == BIRTHDAY_FIELD {
                text = truncate_iso_date(&text).to_string();
            }
            field.value = text;
        }
    }

    /// Collect only fields with non-empty trimmed values into a
    /// partial-update payload. Toggle controls never contribute, and
    /// `birthday` is normalized to `YYYY-MM-DD` on the way out so the
    /// server always receives a canonical date.
    pub fn payload(&self) -> Map<String, Value> {
        let mut out = Map::new();
        for field in &self.fields {
            if field.toggle {
                continue;
            }
            let trimmed = field.value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = if field.name == BIRTHDAY_FIELD {
                normalize_date(trimmed)
            } else {
                trimmed.to_string()
            };
            out.insert(field.name.clone(), Value::String(value));
        }
        out
    }

    /// Apply the access mode: `Viewer` disables every non-toggle
    /// control, `Editor` enables everything.
    pub fn set_access(&mut self, access: ProfileAccess) {
        for field in &mut self.fields {
            field.enabled = match access {
                ProfileAccess::Viewer => field.toggle,
                ProfileAccess::Editor => true,
            };
        }
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.enabled)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

//! Employee Model
//!
//! Directory projections served by the admin employee API.

use crate::util::display_or_dash;
use serde::{Deserialize, Serialize};

/// List-item projection from `GET /admin/employees/all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Full record from `GET /admin/employees/{id}`.
///
/// Everything beyond the id is optional; rendering substitutes `"-"`
/// uniformly for anything absent or blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDetail {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub salary: Option<f64>,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub marital_status: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub uan: Option<String>,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub aadhar: Option<String>,
    #[serde(default)]
    pub personal_email: Option<String>,
    #[serde(default)]
    pub personal_mobile: Option<String>,
    #[serde(default)]
    pub seating_location: Option<String>,
    #[serde(default)]
    pub bank_account_no: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub payment_mode: Option<String>,
}

impl EmployeeDetail {
    /// Fixed-schema label/value rows for the detail table.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let num_i64 = |v: Option<i64>| v.map(|n| n.to_string());
        let num_f64 = |v: Option<f64>| v.map(|n| n.to_string());
        let rows = [
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Role", self.role.clone()),
            ("Department", num_i64(self.department_id)),
            ("Salary", num_f64(self.salary)),
            ("Joining Date", self.joining_date.clone()),
            ("Status", self.status.clone()),
            ("Birthday", self.birthday.clone()),
            ("Gender", self.gender.clone()),
            ("Marital Status", self.marital_status.clone()),
            ("Father's Name", self.father_name.clone()),
            ("LinkedIn", self.linkedin_url.clone()),
            ("UAN", self.uan.clone()),
            ("PAN", self.pan.clone()),
            ("Aadhar", self.aadhar.clone()),
            ("Personal Email", self.personal_email.clone()),
            ("Personal Mobile", self.personal_mobile.clone()),
            ("Seating Location", self.seating_location.clone()),
            ("Bank Account No", self.bank_account_no.clone()),
            ("Bank Name", self.bank_name.clone()),
            ("IFSC Code", self.ifsc_code.clone()),
            ("Account Type", self.account_type.clone()),
            ("Payment Mode", self.payment_mode.clone()),
        ];
        rows.into_iter()
            .map(|(label, value)| (label, display_or_dash(value.as_deref())))
            .collect()
    }
}

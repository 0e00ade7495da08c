use serde::{Deserialize, Serialize};

use super::form::EmployeeForm;

/// Gender as stored by the employees table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Case-insensitive parse of the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" | "m" => Some(Gender::Male),
            "F" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Employee record as returned by `GET /api/employees` and `GET /api/employee/{emp_no}`.
///
/// Dates are kept as the strings the server sends (`YYYY-MM-DD`, sometimes with a time part).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_no: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub hire_date: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Projects the record onto the editable form, dates cut to their date part.
    pub fn editable_fields(&self) -> EmployeeForm {
        EmployeeForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.code().to_string(),
            birth_date: date_part(&self.birth_date),
            hire_date: date_part(&self.hire_date),
        }
    }
}

fn date_part(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

/// Body of a successful `POST /api/employees`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    pub emp_no: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a successful `PUT` or `DELETE` on `/api/employee/{emp_no}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

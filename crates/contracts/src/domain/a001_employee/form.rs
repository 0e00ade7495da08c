use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::Gender;

/// Editable employee fields as typed into the create/edit forms.
///
/// Also the request body of `POST /api/employees` and `PUT /api/employee/{emp_no}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_date: String,
    pub hire_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Gender must be M or F, got '{0}'")]
    InvalidGender(String),
}

impl EmployeeForm {
    /// Trims every field and normalises gender to its upper-case code.
    ///
    /// Dates are only checked for presence; their format is the server's business.
    pub fn validated(&self) -> Result<EmployeeForm, EmployeeFormError> {
        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Gender", &self.gender),
            ("Birth date", &self.birth_date),
            ("Hire date", &self.hire_date),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(EmployeeFormError::MissingField(label));
            }
        }

        let gender = Gender::from_code(&self.gender)
            .ok_or_else(|| EmployeeFormError::InvalidGender(self.gender.trim().to_string()))?;

        Ok(EmployeeForm {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            gender: gender.code().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            hire_date: self.hire_date.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EmployeeForm {
        EmployeeForm {
            first_name: " Parto ".into(),
            last_name: "Bamford".into(),
            gender: "m".into(),
            birth_date: "1959-12-03".into(),
            hire_date: "1986-08-28".into(),
        }
    }

    #[test]
    fn test_validated_normalises_fields() {
        let form = sample().validated().unwrap();
        assert_eq!(form.first_name, "Parto");
        assert_eq!(form.gender, "M");
    }

    #[test]
    fn test_missing_field_is_reported_first() {
        let mut form = sample();
        form.last_name = "   ".into();
        form.hire_date.clear();
        assert_eq!(
            form.validated(),
            Err(EmployeeFormError::MissingField("Last name"))
        );
    }

    #[test]
    fn test_invalid_gender() {
        let mut form = sample();
        form.gender = "X".into();
        let err = form.validated().unwrap_err();
        assert_eq!(err.to_string(), "Gender must be M or F, got 'X'");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(sample().validated().unwrap()).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["first_name", "last_name", "gender", "birth_date", "hire_date"]
        );
    }
}

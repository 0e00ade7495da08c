pub mod aggregate;
pub mod form;

pub use aggregate::{CreateEmployeeResponse, Employee, Gender, MessageResponse};
pub use form::{EmployeeForm, EmployeeFormError};

/// Index used as the tab-key prefix for employee screens.
pub const ENTITY_INDEX: &str = "a001_employee";

/// Name of the employee table on the backend.
pub const TABLE_NAME: &str = "employees";

//! Employee create/edit form
//!
//! One form serves both `a001_employee_new` and `a001_employee_edit_{emp_no}`;
//! [`FormMode`] decides the request and where to go afterwards.

mod view;
mod view_model;

pub use view::EmployeeFormPage;
pub use view_model::{EmployeeFormViewModel, FormMode};

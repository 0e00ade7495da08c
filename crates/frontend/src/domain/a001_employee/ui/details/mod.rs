//! Employee Details UI Module
//!
//! - view_model.rs: record loading and the delete command
//! - view.rs: read-only card with Edit / Delete / Back

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;

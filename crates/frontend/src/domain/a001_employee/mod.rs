pub mod api;
pub mod tabs;
pub mod ui;

pub use tabs::EmployeeTab;

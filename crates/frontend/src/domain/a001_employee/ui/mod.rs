pub mod columns;
pub mod details;
pub mod form;
pub mod list;

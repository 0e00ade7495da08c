//! u101 Query Builder: pick a table, project columns, filter, run.
//!
//! - `state` - state machine (pure, unit tested)
//! - `api` - HTTP calls
//! - `view_model` - signal wrapper that runs the requests
//! - `view` - Leptos component

pub mod api;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::QueryBuilderPage;

//! Left zone: the collapsible container and the navigation sidebar inside it.

pub mod left;
pub mod sidebar;

pub use left::Left;
pub use sidebar::Sidebar;

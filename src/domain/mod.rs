//! Domain values shared by forms, services and templates.

pub mod header;
pub mod navigation;
pub mod results;
pub mod search;
pub mod types;

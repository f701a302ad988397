//! DTO modules that bridge services with templates.

pub mod main;
pub mod search;

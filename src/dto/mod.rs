//! DTO modules that bridge services with templates and the JSON feed.

pub mod blog;
pub mod catalog;
pub mod main;
pub mod plants;
pub mod products;

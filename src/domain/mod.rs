//! Domain entities exposed by the API and the lead-capture payloads.

pub mod blog;
pub mod category;
pub mod lead;
pub mod nature;
pub mod plant;
pub mod product;
pub mod types;

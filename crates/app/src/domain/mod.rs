//! Leadgate Domain Concerns

pub mod assets;
pub mod categories;
pub mod leads;
pub mod subscribers;

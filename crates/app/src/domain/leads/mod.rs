//! Leads

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod token;

pub use errors::LeadsServiceError;
pub use service::*;

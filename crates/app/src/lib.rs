//! Lead capture, download tokens and newsletter persistence.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

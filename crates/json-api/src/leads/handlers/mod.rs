//! Lead Handlers

pub(crate) mod create;
pub(crate) mod download;
pub(crate) mod index;
pub(crate) mod verify;

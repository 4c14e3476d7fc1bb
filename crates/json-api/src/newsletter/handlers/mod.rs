//! Newsletter Handlers

pub(crate) mod subscribe;

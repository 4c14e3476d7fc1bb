//! Extension traits

mod category;
mod depot;
mod result;

pub(crate) use category::CategoryExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;

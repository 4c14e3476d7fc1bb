//! Lead category path parsing helpers.

use salvo::{oapi::extract::PathParam, prelude::StatusError};

use leadgate_app::domain::categories::LeadCategory;

pub(crate) trait CategoryExt {
    /// Parse the `{category}` path segment; unknown categories are not routes.
    fn into_category(self) -> Result<LeadCategory, StatusError>;
}

impl CategoryExt for PathParam<String> {
    fn into_category(self) -> Result<LeadCategory, StatusError> {
        self.into_inner()
            .parse()
            .map_err(|_unknown| StatusError::not_found().brief("Unknown asset category"))
    }
}

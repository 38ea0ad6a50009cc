use snafu::Snafu;

use crate::request::RequestField;

/// Errors that prevent a link from being built.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum BuildLinkError {
    /// A field that must be present was empty after trimming.
    #[snafu(display("Required field '{field}' is empty"))]
    MissingRequiredField {
        /// The missing field.
        field: RequestField,
    },
}

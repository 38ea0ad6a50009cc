//! Type-erased errors from pluggable backends.
//!
//! [`BoxedError`] lets a trait seam such as
//! [`Clipboard`](crate::clipboard::Clipboard) report any backend error
//! without leaking the backend's error type into the session API.

use snafu::Snafu;

/// A boxed error that can be used without type parameters.
#[derive(Debug, Snafu)]
#[snafu(transparent)]
pub struct BoxedError {
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl BoxedError {
    /// Create a new boxed error from any error value.
    pub fn from_err<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

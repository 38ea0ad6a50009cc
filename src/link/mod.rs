//! Assembles the authorization request link.
//!
//! [`LinkBuilder`] turns a [`RequestParams`](crate::RequestParams) record and a
//! [`SelectionSet`](crate::SelectionSet) into the URL the user should visit.
//! Building is pure: inputs are only read, and identical inputs always give
//! identical output.

mod builder;
mod encode;
mod error;
mod query;

pub use builder::{LinkBuilder, MISSING_REQUIRED_PLACEHOLDER, build_link};
pub use encode::percent_encode_component;
pub use error::BuildLinkError;

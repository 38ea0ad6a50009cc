//! Builds OAuth 2.0 authorization request links from a catalog of scopes.
//!
//! The core is [`link::build_link`]: a pure function from the request form
//! ([`RequestParams`]) and the chosen scopes ([`SelectionSet`]) to the URL the
//! user should visit. [`Session`] holds the state of an interactive front end
//! and rebuilds the link after every change.
//!
//! ```
//! use scopelink::{RequestParams, SelectionSet, link::build_link};
//!
//! let params = RequestParams::builder()
//!     .client_id("abc")
//!     .redirect_uri("https://x.test/cb")
//!     .response_type("code")
//!     .build();
//! let selection = SelectionSet::from_iter(["email", "openid"]);
//!
//! assert_eq!(
//!     build_link(&params, &selection).unwrap(),
//!     "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc\
//!      &redirect_uri=https%3A%2F%2Fx.test%2Fcb&response_type=code&scope=email%20openid"
//! );
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod catalog;
pub mod clipboard;
pub mod command;
pub mod config;
mod endpoint_url;
mod error;
pub mod link;
pub mod request;
pub mod selection;
pub mod session;

pub use catalog::{Catalog, Category, ScopeEntry};
pub use config::Config;
pub use endpoint_url::{
    EndpointUrl, EndpointUrlError, GOOGLE_AUTHORIZATION_ENDPOINT, IntoEndpointUrl,
};
pub use error::BoxedError;
pub use link::{BuildLinkError, LinkBuilder};
pub use request::{RequestField, RequestParams};
pub use selection::SelectionSet;
pub use session::Session;

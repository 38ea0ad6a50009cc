//! The authorization endpoint a link is built against.
//!
//! [`EndpointUrl`] wraps a parsed absolute [`Uri`], so an endpoint read from a
//! configuration file is validated once and can then be reused for every
//! rebuild of the link.

use std::fmt;

use http::{Uri, uri::InvalidUri};
use serde::Deserialize;
use snafu::prelude::*;

/// The Google OAuth 2.0 authorization endpoint.
pub const GOOGLE_AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// A validated authorization endpoint URL with a scheme and authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointUrl(Uri);

impl<'de> Deserialize<'de> for EndpointUrl {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.into_endpoint_url().map_err(serde::de::Error::custom)
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        Self(Uri::from_static(GOOGLE_AUTHORIZATION_ENDPOINT))
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl EndpointUrl {
    /// Returns the inner [`Uri`].
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.0
    }

    /// Returns the text that joins this endpoint to a query string.
    ///
    /// Endpoints that already carry a query get `&`, so the assembled link
    /// never contains more than one `?`. An endpoint whose query is empty or
    /// already ends in `&` needs no separator at all.
    #[must_use]
    pub fn query_separator(&self) -> &'static str {
        match self.0.query() {
            Some(q) if q.is_empty() || q.ends_with('&') => "",
            Some(_) => "&",
            None => "?",
        }
    }

    fn parse(s: &str) -> Result<Self, EndpointUrlError> {
        let uri = s.parse::<Uri>().context(InvalidSnafu)?;
        ensure!(
            uri.scheme().is_some() && uri.authority().is_some(),
            NotAbsoluteSnafu { uri: s }
        );
        Ok(Self(uri))
    }
}

/// Conversion trait for types that can be turned into an [`EndpointUrl`].
pub trait IntoEndpointUrl {
    /// The error type returned if the conversion fails.
    type Error;

    /// Attempts to convert this value into an [`EndpointUrl`].
    fn into_endpoint_url(self) -> Result<EndpointUrl, Self::Error>;
}

impl IntoEndpointUrl for &str {
    type Error = EndpointUrlError;

    fn into_endpoint_url(self) -> Result<EndpointUrl, Self::Error> {
        EndpointUrl::parse(self)
    }
}

impl IntoEndpointUrl for String {
    type Error = EndpointUrlError;

    fn into_endpoint_url(self) -> Result<EndpointUrl, Self::Error> {
        EndpointUrl::parse(&self)
    }
}

/// Errors from validating an endpoint URL.
#[derive(Debug, Snafu)]
pub enum EndpointUrlError {
    /// The value is not a URI.
    #[snafu(display("Invalid endpoint URL"))]
    Invalid {
        /// The underlying parse error.
        source: InvalidUri,
    },
    /// The URI has no scheme or no host.
    #[snafu(display("Endpoint URL '{uri}' must be absolute, with a scheme and host"))]
    NotAbsolute {
        /// The rejected value.
        uri: String,
    },
}

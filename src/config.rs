//! Optional TOML configuration.
//!
//! A configuration file can replace the built-in catalog, point links at a
//! different authorization endpoint, and pre-fill form fields:
//!
//! ```toml
//! authorization_endpoint = "https://accounts.google.com/o/oauth2/v2/auth"
//!
//! [defaults]
//! response_type = "code"
//!
//! [[category]]
//! name = "User Information"
//! [[category.scope]]
//! description = "View your email address"
//! id = "email"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use snafu::prelude::*;
use tracing::debug;

use crate::{
    EndpointUrl,
    catalog::{Catalog, Category},
    link::LinkBuilder,
    request::RequestParams,
    session::Session,
};

/// The contents of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Overrides the authorization endpoint.
    pub authorization_endpoint: Option<EndpointUrl>,
    /// Initial form values.
    pub defaults: RequestParams,
    /// Replaces the built-in catalog when non-empty.
    #[serde(rename = "category")]
    pub categories: Vec<Category>,
}

impl Config {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, has unknown keys,
    /// or names an invalid endpoint.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).context(ParseSnafu)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).context(ReadSnafu { path })?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            categories = config.categories.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// The configured catalog, or the built-in one when none is configured.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.categories.iter().cloned()).unwrap_or_default()
    }

    /// A link builder for the configured endpoint.
    #[must_use]
    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::builder()
            .maybe_endpoint(self.authorization_endpoint.clone())
            .build()
    }

    /// Starts a session from this configuration.
    #[must_use]
    pub fn into_session(self) -> Session {
        let catalog = self.catalog();
        let builder = self.link_builder();
        Session::new(catalog, builder, self.defaults)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Snafu)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[snafu(display("Failed to read configuration file '{}'", path.display()))]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The configuration could not be parsed.
    #[snafu(display("Failed to parse configuration"))]
    Parse {
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

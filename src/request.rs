//! The form fields that make up an authorization request.

use std::{fmt, str::FromStr};

use bon::Builder;
use serde::Deserialize;
use snafu::Snafu;

/// The user-supplied values of the authorization request form.
///
/// Every field is free-form text. Only the client identifier and redirect URI
/// are checked, and only for presence, when the link is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Deserialize)]
#[builder(on(String, into))]
#[serde(default, deny_unknown_fields)]
pub struct RequestParams {
    /// The OAuth client identifier.
    #[builder(default)]
    pub client_id: String,
    /// Where the authorization server sends the user back to.
    #[builder(default)]
    pub redirect_uri: String,
    /// The requested response type, commonly `code` or `token`.
    #[builder(default)]
    pub response_type: String,
    /// `online` or `offline`.
    #[builder(default)]
    pub access_type: String,
    /// Opaque value echoed back on the redirect.
    #[builder(default)]
    pub state: String,
    /// Whether previously granted scopes should be included.
    #[builder(default)]
    pub include_granted_scopes: String,
    /// Hint about which account to sign in with.
    #[builder(default)]
    pub login_hint: String,
    /// Consent and account selection prompt behavior.
    #[builder(default)]
    pub prompt: String,
}

impl RequestParams {
    /// Returns the current value of `field`.
    #[must_use]
    pub fn get(&self, field: RequestField) -> &str {
        match field {
            RequestField::ClientId => &self.client_id,
            RequestField::RedirectUri => &self.redirect_uri,
            RequestField::ResponseType => &self.response_type,
            RequestField::AccessType => &self.access_type,
            RequestField::State => &self.state,
            RequestField::IncludeGrantedScopes => &self.include_granted_scopes,
            RequestField::LoginHint => &self.login_hint,
            RequestField::Prompt => &self.prompt,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: RequestField, value: impl Into<String>) {
        let slot = match field {
            RequestField::ClientId => &mut self.client_id,
            RequestField::RedirectUri => &mut self.redirect_uri,
            RequestField::ResponseType => &mut self.response_type,
            RequestField::AccessType => &mut self.access_type,
            RequestField::State => &mut self.state,
            RequestField::IncludeGrantedScopes => &mut self.include_granted_scopes,
            RequestField::LoginHint => &mut self.login_hint,
            RequestField::Prompt => &mut self.prompt,
        };
        *slot = value.into();
    }
}

/// Names one of the [`RequestParams`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestField {
    /// `client_id`
    ClientId,
    /// `redirect_uri`
    RedirectUri,
    /// `response_type`
    ResponseType,
    /// `access_type`
    AccessType,
    /// `state`
    State,
    /// `include_granted_scopes`
    IncludeGrantedScopes,
    /// `login_hint`
    LoginHint,
    /// `prompt`
    Prompt,
}

impl RequestField {
    /// Every field, in the order parameters appear in the link.
    pub const ALL: [RequestField; 8] = [
        RequestField::ClientId,
        RequestField::RedirectUri,
        RequestField::ResponseType,
        RequestField::AccessType,
        RequestField::State,
        RequestField::IncludeGrantedScopes,
        RequestField::LoginHint,
        RequestField::Prompt,
    ];

    /// The query parameter name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequestField::ClientId => "client_id",
            RequestField::RedirectUri => "redirect_uri",
            RequestField::ResponseType => "response_type",
            RequestField::AccessType => "access_type",
            RequestField::State => "state",
            RequestField::IncludeGrantedScopes => "include_granted_scopes",
            RequestField::LoginHint => "login_hint",
            RequestField::Prompt => "prompt",
        }
    }

    /// A short label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RequestField::ClientId => "Client ID",
            RequestField::RedirectUri => "Redirect URI",
            RequestField::ResponseType => "Response Type",
            RequestField::AccessType => "Access Type",
            RequestField::State => "State",
            RequestField::IncludeGrantedScopes => "Include Granted Scopes",
            RequestField::LoginHint => "Login Hint",
            RequestField::Prompt => "Prompt",
        }
    }
}

impl fmt::Display for RequestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        RequestField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| UnknownFieldError {
                name: s.to_string(),
            })
    }
}

/// The given name does not match any request field.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Unknown field '{name}'"))]
pub struct UnknownFieldError {
    /// The name that was not recognized.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_empty() {
        let params = RequestParams::builder().client_id("abc").build();
        assert_eq!(params.client_id, "abc");
        assert_eq!(params.redirect_uri, "");
        assert_eq!(params.prompt, "");
    }

    #[test]
    fn test_get_and_set_every_field() {
        let mut params = RequestParams::default();
        for field in RequestField::ALL {
            params.set(field, field.label());
        }
        for field in RequestField::ALL {
            assert_eq!(params.get(field), field.label());
        }
        assert_eq!(params.include_granted_scopes, "Include Granted Scopes");
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!(
            "client_id".parse::<RequestField>(),
            Ok(RequestField::ClientId)
        );
        assert_eq!(
            "Include-Granted-Scopes".parse::<RequestField>(),
            Ok(RequestField::IncludeGrantedScopes)
        );
        assert_eq!(
            "scope".parse::<RequestField>(),
            Err(UnknownFieldError {
                name: "scope".to_string()
            })
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let params = toml::from_str::<RequestParams>(
            r#"
            response_type = "code"
            access_type = "offline"
            "#,
        )
        .unwrap();
        assert_eq!(params.response_type, "code");
        assert_eq!(params.access_type, "offline");
        assert_eq!(params.client_id, "");
    }

    #[test]
    fn test_deserialize_rejects_unknown_key() {
        assert!(toml::from_str::<RequestParams>(r#"scopes = "email""#).is_err());
    }
}

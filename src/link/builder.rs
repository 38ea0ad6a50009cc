use bon::Builder;
use tracing::trace;

use crate::{
    EndpointUrl,
    link::{error::BuildLinkError, query::AuthorizationQuery},
    request::RequestParams,
    selection::SelectionSet,
};

/// Shown in place of a link while a required field is empty.
pub const MISSING_REQUIRED_PLACEHOLDER: &str = "Client ID and Redirect URI are required.";

/// Builds authorization request links against a fixed endpoint.
#[derive(Debug, Clone, Default, Builder)]
pub struct LinkBuilder {
    /// Defaults to the Google authorization endpoint.
    #[builder(default)]
    endpoint: EndpointUrl,
}

impl LinkBuilder {
    /// The endpoint links are built against.
    #[must_use]
    pub fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Builds the authorization link for the given form values and selection.
    ///
    /// Every field is trimmed. `client_id`, `redirect_uri`, `response_type`
    /// and `scope` are always emitted, in that order, followed by whichever of
    /// `access_type`, `state`, `include_granted_scopes`, `login_hint` and
    /// `prompt` are non-empty. The scope value is the space-joined selection,
    /// percent-encoded as a whole.
    ///
    /// # Errors
    ///
    /// Returns [`BuildLinkError::MissingRequiredField`] if the client
    /// identifier or redirect URI is empty after trimming.
    pub fn build_link(
        &self,
        params: &RequestParams,
        selection: &SelectionSet,
    ) -> Result<String, BuildLinkError> {
        let scope = selection.scope_string();
        let query = AuthorizationQuery::new(params, &scope)?;

        let mut link = self.endpoint.to_string();
        link.push_str(self.endpoint.query_separator());
        query.push_to_string(&mut link);

        trace!(scopes = selection.len(), "built authorization link");
        Ok(link)
    }

    /// Returns the text to display: the link, or
    /// [`MISSING_REQUIRED_PLACEHOLDER`] when it cannot be built.
    #[must_use]
    pub fn render(&self, params: &RequestParams, selection: &SelectionSet) -> String {
        match self.build_link(params, selection) {
            Ok(link) => link,
            Err(BuildLinkError::MissingRequiredField { .. }) => {
                MISSING_REQUIRED_PLACEHOLDER.to_string()
            }
        }
    }
}

/// Builds a link against the default endpoint. See [`LinkBuilder::build_link`].
///
/// # Errors
///
/// Returns [`BuildLinkError::MissingRequiredField`] if the client identifier
/// or redirect URI is empty after trimming.
pub fn build_link(
    params: &RequestParams,
    selection: &SelectionSet,
) -> Result<String, BuildLinkError> {
    LinkBuilder::default().build_link(params, selection)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{IntoEndpointUrl as _, request::RequestField};

    fn base_params() -> RequestParams {
        RequestParams::builder()
            .client_id("abc")
            .redirect_uri("https://x.test/cb")
            .response_type("code")
            .build()
    }

    fn full_params() -> RequestParams {
        RequestParams::builder()
            .client_id("abc")
            .redirect_uri("https://x.test/cb")
            .response_type("code")
            .access_type("offline")
            .state("s 1")
            .include_granted_scopes("true")
            .login_hint("user@example.com")
            .prompt("consent select_account")
            .build()
    }

    #[test]
    fn test_basic_link() {
        let selection = SelectionSet::from_iter(["email", "openid"]);
        let link = build_link(&base_params(), &selection).unwrap();
        assert_eq!(
            link,
            "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc&redirect_uri=https%3A%2F%2Fx.test%2Fcb&response_type=code&scope=email%20openid"
        );
    }

    #[test]
    fn test_all_optional_fields_in_order() {
        let selection = SelectionSet::from_iter(["https://www.googleapis.com/auth/drive"]);
        let link = build_link(&full_params(), &selection).unwrap();
        assert_eq!(
            link,
            "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc\
             &redirect_uri=https%3A%2F%2Fx.test%2Fcb\
             &response_type=code\
             &scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fdrive\
             &access_type=offline\
             &state=s%201\
             &include_granted_scopes=true\
             &login_hint=user%40example.com\
             &prompt=consent%20select_account"
        );
    }

    #[test]
    fn test_missing_client_id() {
        for client_id in ["", "   ", "\t\n"] {
            let mut params = full_params();
            params.client_id = client_id.to_string();
            let selection = SelectionSet::from_iter(["email"]);
            assert_eq!(
                build_link(&params, &selection),
                Err(BuildLinkError::MissingRequiredField {
                    field: RequestField::ClientId
                })
            );
            assert_eq!(
                LinkBuilder::default().render(&params, &selection),
                MISSING_REQUIRED_PLACEHOLDER
            );
        }
    }

    #[test]
    fn test_missing_redirect_uri() {
        let mut params = full_params();
        params.redirect_uri = "  ".to_string();
        assert_eq!(
            build_link(&params, &SelectionSet::new()),
            Err(BuildLinkError::MissingRequiredField {
                field: RequestField::RedirectUri
            })
        );
    }

    #[test]
    fn test_missing_state_is_omitted() {
        let mut params = full_params();
        params.state = "   ".to_string();
        let link = build_link(&params, &SelectionSet::new()).unwrap();
        assert!(!link.contains("state="));
        for key in [
            "access_type=",
            "include_granted_scopes=",
            "login_hint=",
            "prompt=",
        ] {
            assert!(link.contains(key), "{key} missing from {link}");
        }
    }

    #[test]
    fn test_empty_response_type_and_scope_still_present() {
        let params = RequestParams::builder()
            .client_id("abc")
            .redirect_uri("r")
            .build();
        let link = build_link(&params, &SelectionSet::new()).unwrap();
        assert_eq!(
            link,
            "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc&redirect_uri=r&response_type=&scope="
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let params = RequestParams::builder()
            .client_id("  abc ")
            .redirect_uri("\thttps://x.test/cb\n")
            .response_type(" code ")
            .prompt(" none ")
            .build();
        let link = build_link(&params, &SelectionSet::from_iter(["email"])).unwrap();
        assert_eq!(
            link,
            "https://accounts.google.com/o/oauth2/v2/auth?client_id=abc&redirect_uri=https%3A%2F%2Fx.test%2Fcb&response_type=code&scope=email&prompt=none"
        );
    }

    #[test]
    fn test_link_shape() {
        let tricky = ["", "a?b", "x&y=z", "&&", "?", " spaced value "];
        for value in tricky {
            let mut params = full_params();
            params.state = value.to_string();
            params.login_hint = value.to_string();
            params.response_type = value.to_string();
            let selection = SelectionSet::from_iter(["openid", value, "a&b"]);
            let link = build_link(&params, &selection).unwrap();

            assert_eq!(link.matches('?').count(), 1, "{link}");
            assert!(!link.ends_with('&'), "{link}");
            assert!(!link.contains("&&"), "{link}");
            assert!(!link.contains("?&"), "{link}");
        }
    }

    #[test]
    fn test_repeated_builds_are_identical() {
        let params = full_params();
        let selection = SelectionSet::from_iter(["email", "profile"]);
        let builder = LinkBuilder::default();
        let before = (params.clone(), selection.clone());

        let first = builder.build_link(&params, &selection);
        let second = builder.build_link(&params, &selection);
        assert_eq!(first, second);
        assert_eq!((params, selection), before);
    }

    #[test]
    fn test_endpoint_with_existing_query() {
        let builder = LinkBuilder::builder()
            .endpoint(
                "https://auth.example.com/authorize?tenant=acme"
                    .into_endpoint_url()
                    .unwrap(),
            )
            .build();
        let link = builder
            .build_link(&base_params(), &SelectionSet::new())
            .unwrap();
        assert_eq!(
            link,
            "https://auth.example.com/authorize?tenant=acme&client_id=abc&redirect_uri=https%3A%2F%2Fx.test%2Fcb&response_type=code&scope="
        );
    }

    #[test]
    fn test_endpoint_query_ending_in_ampersand() {
        let builder = LinkBuilder::builder()
            .endpoint(
                "https://auth.example.com/authorize?tenant=acme&"
                    .into_endpoint_url()
                    .unwrap(),
            )
            .build();
        let params = RequestParams::builder()
            .client_id("abc")
            .redirect_uri("r")
            .build();
        let link = builder.build_link(&params, &SelectionSet::new()).unwrap();
        assert!(!link.contains("&&"), "{link}");
        assert_eq!(link.matches('?').count(), 1, "{link}");
        assert_eq!(
            link,
            "https://auth.example.com/authorize?tenant=acme&client_id=abc&redirect_uri=r&response_type=&scope="
        );
    }
}

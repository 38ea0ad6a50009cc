use snafu::ensure;

use crate::{
    link::{encode::percent_encode_component, error::MissingRequiredFieldSnafu},
    request::{RequestField, RequestParams},
};

use super::BuildLinkError;

/// The trimmed query parameters of an authorization request, in link order.
#[derive(Debug, Clone, Copy)]
pub(super) struct AuthorizationQuery<'a> {
    client_id: &'a str,
    redirect_uri: &'a str,
    response_type: &'a str,
    scope: &'a str,
    access_type: &'a str,
    state: &'a str,
    include_granted_scopes: &'a str,
    login_hint: &'a str,
    prompt: &'a str,
}

impl<'a> AuthorizationQuery<'a> {
    pub(super) fn new(params: &'a RequestParams, scope: &'a str) -> Result<Self, BuildLinkError> {
        let client_id = params.client_id.trim();
        let redirect_uri = params.redirect_uri.trim();
        ensure!(
            !client_id.is_empty(),
            MissingRequiredFieldSnafu {
                field: RequestField::ClientId
            }
        );
        ensure!(
            !redirect_uri.is_empty(),
            MissingRequiredFieldSnafu {
                field: RequestField::RedirectUri
            }
        );

        Ok(Self {
            client_id,
            redirect_uri,
            response_type: params.response_type.trim(),
            scope,
            access_type: params.access_type.trim(),
            state: params.state.trim(),
            include_granted_scopes: params.include_granted_scopes.trim(),
            login_hint: params.login_hint.trim(),
            prompt: params.prompt.trim(),
        })
    }

    /// The parameters to emit. The first four are always present, the
    /// rest only when non-empty.
    fn pairs(&self) -> impl Iterator<Item = (&'static str, &'a str)> {
        let required = [
            ("client_id", self.client_id),
            ("redirect_uri", self.redirect_uri),
            ("response_type", self.response_type),
            ("scope", self.scope),
        ];
        let optional = [
            ("access_type", self.access_type),
            ("state", self.state),
            ("include_granted_scopes", self.include_granted_scopes),
            ("login_hint", self.login_hint),
            ("prompt", self.prompt),
        ];
        required
            .into_iter()
            .chain(optional.into_iter().filter(|(_, value)| !value.is_empty()))
    }

    /// Appends `key=value` pairs joined by `&` to `out`.
    pub(super) fn push_to_string(&self, out: &mut String) {
        for (i, (key, value)) in self.pairs().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(&percent_encode_component(value));
        }
    }
}

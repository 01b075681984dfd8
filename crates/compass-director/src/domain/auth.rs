//! Auth conversion between the domain model and GraphQL.

use compass_core::errors::CoreError;
use compass_core::{graphql, model};

use crate::error::ConvertError;

pub trait AuthConverter: Send + Sync {
    /// `None` converts to `None`.
    fn to_graphql(&self, auth: Option<&model::Auth>) -> Result<Option<graphql::Auth>, ConvertError>;

    /// `None` converts to `None`.
    fn input_from_graphql(
        &self,
        input: Option<&graphql::AuthInput>,
    ) -> Result<Option<model::AuthInput>, ConvertError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl AuthConverter for Converter {
    fn to_graphql(&self, auth: Option<&model::Auth>) -> Result<Option<graphql::Auth>, ConvertError> {
        let Some(auth) = auth else {
            return Ok(None);
        };

        Ok(Some(graphql::Auth {
            credential: credential_to_graphql(&auth.credential),
            additional_headers: auth.additional_headers.clone(),
            additional_query_params: auth.additional_query_params.clone(),
            request_auth: auth.request_auth.as_ref().map(|r| graphql::CredentialRequestAuth {
                csrf: r
                    .csrf
                    .as_ref()
                    .map(|c| graphql::CsrfTokenCredentialRequestAuth {
                        token_endpoint_url: c.token_endpoint_url.clone(),
                        credential: credential_to_graphql(&c.credential),
                        additional_headers: c.additional_headers.clone(),
                        additional_query_params: c.additional_query_params.clone(),
                    }),
            }),
        }))
    }

    fn input_from_graphql(
        &self,
        input: Option<&graphql::AuthInput>,
    ) -> Result<Option<model::AuthInput>, ConvertError> {
        let Some(input) = input else {
            return Ok(None);
        };

        let credential = input
            .credential
            .as_ref()
            .map(credential_input_from_graphql)
            .transpose()?;

        let request_auth = match &input.request_auth {
            Some(request_auth) => Some(model::CredentialRequestAuthInput {
                csrf: request_auth
                    .csrf
                    .as_ref()
                    .map(|c| -> Result<model::CsrfTokenCredentialRequestAuthInput, ConvertError> {
                        Ok(model::CsrfTokenCredentialRequestAuthInput {
                            token_endpoint_url: c.token_endpoint_url.clone(),
                            credential: c
                                .credential
                                .as_ref()
                                .map(credential_input_from_graphql)
                                .transpose()
                                .map_err(|e| e.wrap("while converting CSRF credential input"))?,
                            additional_headers: c.additional_headers.clone(),
                            additional_query_params: c.additional_query_params.clone(),
                        })
                    })
                    .transpose()?,
            }),
            None => None,
        };

        Ok(Some(model::AuthInput {
            credential,
            additional_headers: input.additional_headers.clone(),
            additional_query_params: input.additional_query_params.clone(),
            request_auth,
        }))
    }
}

/// Basic wins when a stored credential somehow carries both kinds.
fn credential_to_graphql(credential: &model::CredentialData) -> Option<graphql::CredentialData> {
    if let Some(basic) = &credential.basic {
        return Some(graphql::CredentialData::Basic(graphql::BasicCredentialData {
            username: basic.username.clone(),
            password: basic.password.clone(),
        }));
    }
    credential.oauth.as_ref().map(|oauth| {
        graphql::CredentialData::OAuth(graphql::OAuthCredentialData {
            client_id: oauth.client_id.clone(),
            client_secret: oauth.client_secret.clone(),
            url: oauth.url.clone(),
        })
    })
}

/// Exactly one credential kind must be present.
fn credential_input_from_graphql(
    input: &graphql::CredentialDataInput,
) -> Result<model::CredentialDataInput, ConvertError> {
    if input.basic.is_some() == input.oauth.is_some() {
        return Err(CoreError::validation(
            "exactly one credential type (basic or oauth) must be specified",
        )
        .into());
    }

    Ok(model::CredentialDataInput {
        basic: input
            .basic
            .as_ref()
            .map(|b| model::BasicCredentialDataInput {
                username: b.username.clone(),
                password: b.password.clone(),
            }),
        oauth: input
            .oauth
            .as_ref()
            .map(|o| model::OAuthCredentialDataInput {
                client_id: o.client_id.clone(),
                client_secret: o.client_secret.clone(),
                url: o.url.clone(),
            }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn basic_input() -> graphql::CredentialDataInput {
        graphql::CredentialDataInput {
            basic: Some(graphql::BasicCredentialDataInput {
                username: "user".into(),
                password: "pass".into(),
            }),
            oauth: None,
        }
    }

    #[test]
    fn to_graphql_none_is_none() {
        assert_eq!(Converter.to_graphql(None).unwrap(), None);
    }

    #[test]
    fn to_graphql_maps_oauth_and_csrf() {
        let auth = model::Auth {
            credential: model::CredentialData {
                basic: None,
                oauth: Some(model::OAuthCredentialData {
                    client_id: "id".into(),
                    client_secret: "secret".into(),
                    url: "https://oauth.example.com".into(),
                }),
            },
            additional_headers: None,
            additional_query_params: None,
            request_auth: Some(model::CredentialRequestAuth {
                csrf: Some(model::CsrfTokenCredentialRequestAuth {
                    token_endpoint_url: "https://csrf.example.com".into(),
                    ..Default::default()
                }),
            }),
        };

        let out = Converter.to_graphql(Some(&auth)).unwrap().unwrap();
        assert_eq!(
            out.credential,
            Some(graphql::CredentialData::OAuth(graphql::OAuthCredentialData {
                client_id: "id".into(),
                client_secret: "secret".into(),
                url: "https://oauth.example.com".into(),
            }))
        );
        let csrf = out.request_auth.unwrap().csrf.unwrap();
        assert_eq!(csrf.token_endpoint_url, "https://csrf.example.com");
        assert_eq!(csrf.credential, None);
    }

    #[test]
    fn input_from_graphql_maps_basic() {
        let input = graphql::AuthInput {
            credential: Some(basic_input()),
            ..Default::default()
        };
        let out = Converter.input_from_graphql(Some(&input)).unwrap().unwrap();
        let basic = out.credential.unwrap().basic.unwrap();
        assert_eq!(basic.username, "user");
        assert_eq!(basic.password, "pass");
    }

    #[test]
    fn input_from_graphql_rejects_both_credentials() {
        let mut credential = basic_input();
        credential.oauth = Some(graphql::OAuthCredentialDataInput::default());
        let input = graphql::AuthInput {
            credential: Some(credential),
            ..Default::default()
        };
        let err = Converter.input_from_graphql(Some(&input)).unwrap_err();
        assert!(matches!(err, ConvertError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn input_from_graphql_rejects_empty_csrf_credential() {
        let input = graphql::AuthInput {
            credential: None,
            request_auth: Some(graphql::CredentialRequestAuthInput {
                csrf: Some(graphql::CsrfTokenCredentialRequestAuthInput {
                    token_endpoint_url: "https://csrf.example.com".into(),
                    credential: Some(graphql::CredentialDataInput::default()),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };
        let err = Converter.input_from_graphql(Some(&input)).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("while converting CSRF credential input: Validation error")
        );
    }
}

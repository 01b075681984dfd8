use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Header or query-parameter values keyed by name.
pub type MultiValueMap = BTreeMap<String, Vec<String>>;

/// Credentials plus request decorations needed to call a protected API.
///
/// `Auth` is persisted as a JSON document (see the package
/// `default_instance_auth` column), so its field names follow the stored
/// document instead of Rust casing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Auth {
    #[serde(default)]
    pub credential: CredentialData,
    #[serde(default)]
    pub additional_headers: Option<MultiValueMap>,
    #[serde(default)]
    pub additional_query_params: Option<MultiValueMap>,
    #[serde(default)]
    pub request_auth: Option<CredentialRequestAuth>,
}

/// Exactly one of `basic` or `oauth` is expected to be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialData {
    #[serde(rename = "Basic", default)]
    pub basic: Option<BasicCredentialData>,
    #[serde(rename = "Oauth", default)]
    pub oauth: Option<OAuthCredentialData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct BasicCredentialData {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OAuthCredentialData {
    #[serde(rename = "ClientID")]
    pub client_id: String,
    #[serde(rename = "ClientSecret")]
    pub client_secret: String,
    #[serde(rename = "URL")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialRequestAuth {
    #[serde(rename = "Csrf", default)]
    pub csrf: Option<CsrfTokenCredentialRequestAuth>,
}

/// CSRF token that must be fetched before calling the protected API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CsrfTokenCredentialRequestAuth {
    #[serde(rename = "TokenEndpointURL")]
    pub token_endpoint_url: String,
    #[serde(rename = "Credential", default)]
    pub credential: CredentialData,
    #[serde(rename = "AdditionalHeaders", default)]
    pub additional_headers: Option<MultiValueMap>,
    #[serde(rename = "AdditionalQueryParams", default)]
    pub additional_query_params: Option<MultiValueMap>,
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthInput {
    pub credential: Option<CredentialDataInput>,
    pub additional_headers: Option<MultiValueMap>,
    pub additional_query_params: Option<MultiValueMap>,
    pub request_auth: Option<CredentialRequestAuthInput>,
}

impl AuthInput {
    /// Build the stored auth value. A missing credential yields an empty one.
    #[must_use]
    pub fn to_auth(&self) -> Auth {
        Auth {
            credential: self
                .credential
                .as_ref()
                .map(CredentialDataInput::to_credential_data)
                .unwrap_or_default(),
            additional_headers: self.additional_headers.clone(),
            additional_query_params: self.additional_query_params.clone(),
            request_auth: self
                .request_auth
                .as_ref()
                .map(CredentialRequestAuthInput::to_credential_request_auth),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialDataInput {
    pub basic: Option<BasicCredentialDataInput>,
    pub oauth: Option<OAuthCredentialDataInput>,
}

impl CredentialDataInput {
    #[must_use]
    pub fn to_credential_data(&self) -> CredentialData {
        CredentialData {
            basic: self.basic.as_ref().map(|b| BasicCredentialData {
                username: b.username.clone(),
                password: b.password.clone(),
            }),
            oauth: self.oauth.as_ref().map(|o| OAuthCredentialData {
                client_id: o.client_id.clone(),
                client_secret: o.client_secret.clone(),
                url: o.url.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BasicCredentialDataInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OAuthCredentialDataInput {
    pub client_id: String,
    pub client_secret: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialRequestAuthInput {
    pub csrf: Option<CsrfTokenCredentialRequestAuthInput>,
}

impl CredentialRequestAuthInput {
    #[must_use]
    pub fn to_credential_request_auth(&self) -> CredentialRequestAuth {
        CredentialRequestAuth {
            csrf: self.csrf.as_ref().map(|c| CsrfTokenCredentialRequestAuth {
                token_endpoint_url: c.token_endpoint_url.clone(),
                credential: c
                    .credential
                    .as_ref()
                    .map(CredentialDataInput::to_credential_data)
                    .unwrap_or_default(),
                additional_headers: c.additional_headers.clone(),
                additional_query_params: c.additional_query_params.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CsrfTokenCredentialRequestAuthInput {
    pub token_endpoint_url: String,
    pub credential: Option<CredentialDataInput>,
    pub additional_headers: Option<MultiValueMap>,
    pub additional_query_params: Option<MultiValueMap>,
}

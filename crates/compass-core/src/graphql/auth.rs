use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::scalars::{HttpHeaders, QueryParams};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Auth {
    pub credential: Option<CredentialData>,
    pub additional_headers: Option<HttpHeaders>,
    pub additional_query_params: Option<QueryParams>,
    pub request_auth: Option<CredentialRequestAuth>,
}

/// The `CredentialData` union.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum CredentialData {
    Basic(BasicCredentialData),
    OAuth(OAuthCredentialData),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BasicCredentialData {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OAuthCredentialData {
    pub client_id: String,
    pub client_secret: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialRequestAuth {
    pub csrf: Option<CsrfTokenCredentialRequestAuth>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CsrfTokenCredentialRequestAuth {
    #[serde(rename = "tokenEndpointURL")]
    pub token_endpoint_url: String,
    pub credential: Option<CredentialData>,
    pub additional_headers: Option<HttpHeaders>,
    pub additional_query_params: Option<QueryParams>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthInput {
    #[serde(default)]
    pub credential: Option<CredentialDataInput>,
    #[serde(default)]
    pub additional_headers: Option<HttpHeaders>,
    #[serde(default)]
    pub additional_query_params: Option<QueryParams>,
    #[serde(default)]
    pub request_auth: Option<CredentialRequestAuthInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialDataInput {
    #[serde(default)]
    pub basic: Option<BasicCredentialDataInput>,
    #[serde(default)]
    pub oauth: Option<OAuthCredentialDataInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BasicCredentialDataInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OAuthCredentialDataInput {
    pub client_id: String,
    pub client_secret: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CredentialRequestAuthInput {
    #[serde(default)]
    pub csrf: Option<CsrfTokenCredentialRequestAuthInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CsrfTokenCredentialRequestAuthInput {
    #[serde(rename = "tokenEndpointURL")]
    pub token_endpoint_url: String,
    #[serde(default)]
    pub credential: Option<CredentialDataInput>,
    #[serde(default)]
    pub additional_headers: Option<HttpHeaders>,
    #[serde(default)]
    pub additional_query_params: Option<QueryParams>,
}

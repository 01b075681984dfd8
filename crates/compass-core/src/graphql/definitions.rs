use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::auth::AuthInput;
use crate::model::{ApiSpecType, DocumentFormat, EventSpecType, FetchMode, SpecFormat};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinitionInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "targetURL")]
    pub target_url: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub spec: Option<ApiSpecInput>,
    #[serde(default)]
    pub version: Option<VersionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpecInput {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(rename = "type")]
    pub spec_type: ApiSpecType,
    pub format: SpecFormat,
    #[serde(default)]
    pub fetch_request: Option<FetchRequestInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinitionInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub spec: Option<EventSpecInput>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub version: Option<VersionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSpecInput {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(rename = "type")]
    pub spec_type: EventSpecType,
    pub format: SpecFormat,
    #[serde(default)]
    pub fetch_request: Option<FetchRequestInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    pub title: String,
    pub display_name: String,
    pub description: String,
    pub format: DocumentFormat,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub fetch_request: Option<FetchRequestInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequestInput {
    pub url: String,
    #[serde(default)]
    pub auth: Option<AuthInput>,
    #[serde(default)]
    pub mode: Option<FetchMode>,
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionInput {
    pub value: String,
    #[serde(default)]
    pub deprecated: Option<bool>,
    #[serde(default)]
    pub deprecated_since: Option<String>,
    #[serde(default)]
    pub for_removal: Option<bool>,
}

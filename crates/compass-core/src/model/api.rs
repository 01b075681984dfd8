use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::fetch_request::{FetchRequestInput, SpecFormat};
use super::version::VersionInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiSpecType {
    Odata,
    OpenApi,
}

impl ApiSpecType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Odata => "ODATA",
            Self::OpenApi => "OPEN_API",
        }
    }
}

impl fmt::Display for ApiSpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API definition to create together with its package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiDefinitionInput {
    pub name: String,
    pub description: Option<String>,
    pub target_url: String,
    pub group: Option<String>,
    pub spec: Option<ApiSpecInput>,
    pub version: Option<VersionInput>,
}

/// Inline (`data`) or remote (`fetch_request`) API specification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiSpecInput {
    pub data: Option<String>,
    #[serde(rename = "type")]
    pub spec_type: ApiSpecType,
    pub format: SpecFormat,
    pub fetch_request: Option<FetchRequestInput>,
}

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::fetch_request::{FetchRequestInput, SpecFormat};
use super::version::VersionInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSpecType {
    AsyncApi,
}

impl EventSpecType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsyncApi => "ASYNC_API",
        }
    }
}

impl fmt::Display for EventSpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event definition to create together with its package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventDefinitionInput {
    pub name: String,
    pub description: Option<String>,
    pub spec: Option<EventSpecInput>,
    pub group: Option<String>,
    pub version: Option<VersionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventSpecInput {
    pub data: Option<String>,
    #[serde(rename = "type")]
    pub spec_type: EventSpecType,
    pub format: SpecFormat,
    pub fetch_request: Option<FetchRequestInput>,
}

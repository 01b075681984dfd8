use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::fetch_request::FetchRequestInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
    #[default]
    Markdown,
}

impl DocumentFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "MARKDOWN",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document (guide, how-to) to create together with its package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DocumentInput {
    pub title: String,
    pub display_name: String,
    pub description: String,
    pub format: DocumentFormat,
    pub kind: Option<String>,
    pub data: Option<String>,
    pub fetch_request: Option<FetchRequestInput>,
}

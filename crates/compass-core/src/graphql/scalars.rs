use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::MultiValueMap;

pub type HttpHeaders = MultiValueMap;
pub type QueryParams = MultiValueMap;

/// The `JSONSchema` scalar: a JSON Schema document carried as text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct JsonSchemaString(pub String);

impl JsonSchemaString {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JsonSchemaString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<JsonSchemaString> for String {
    fn from(value: JsonSchemaString) -> Self {
        value.0
    }
}

impl fmt::Display for JsonSchemaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

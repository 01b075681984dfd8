use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::auth::{Auth, AuthInput};
use super::definitions::{ApiDefinitionInput, DocumentInput, EventDefinitionInput};
use super::scalars::JsonSchemaString;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub instance_auth_request_input_schema: Option<JsonSchemaString>,
    pub default_instance_auth: Option<Auth>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageCreateInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instance_auth_request_input_schema: Option<JsonSchemaString>,
    #[serde(default)]
    pub default_instance_auth: Option<AuthInput>,
    #[serde(default)]
    pub api_definitions: Vec<ApiDefinitionInput>,
    #[serde(default)]
    pub event_definitions: Vec<EventDefinitionInput>,
    #[serde(default)]
    pub documents: Vec<DocumentInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpdateInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instance_auth_request_input_schema: Option<JsonSchemaString>,
    #[serde(default)]
    pub default_instance_auth: Option<AuthInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_input_parses_graphql_variables() {
        let input: PackageCreateInput = serde_json::from_str(
            r#"{
                "name": "payments",
                "instanceAuthRequestInputSchema": "{\"type\":\"string\"}",
                "apiDefinitions": [
                    {
                        "name": "orders",
                        "targetURL": "https://orders.example.com",
                        "spec": {"type": "OPEN_API", "format": "YAML", "data": "openapi: 3.0.0"}
                    }
                ],
                "documents": [
                    {"title": "Guide", "displayName": "Guide", "description": "How to", "format": "MARKDOWN"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(input.name, "payments");
        assert_eq!(
            input.instance_auth_request_input_schema,
            Some(JsonSchemaString("{\"type\":\"string\"}".into()))
        );
        assert_eq!(input.api_definitions.len(), 1);
        assert_eq!(input.api_definitions[0].target_url, "https://orders.example.com");
        assert!(input.event_definitions.is_empty());
        assert_eq!(input.documents[0].display_name, "Guide");
    }

    #[test]
    fn package_serializes_camel_case() {
        let pkg = Package {
            id: "pkg-1".into(),
            name: "payments".into(),
            description: None,
            instance_auth_request_input_schema: Some(JsonSchemaString("{}".into())),
            default_instance_auth: None,
        };
        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["instanceAuthRequestInputSchema"], "{}");
        assert!(json["defaultInstanceAuth"].is_null());
    }
}

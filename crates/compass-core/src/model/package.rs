use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::api::ApiDefinitionInput;
use super::auth::{Auth, AuthInput};
use super::document::DocumentInput;
use super::event::EventDefinitionInput;

/// A named bundle of API, event, and document definitions owned by an
/// application, with an optional credential pre-provisioned for consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Package {
    pub id: String,
    pub tenant_id: String,
    pub application_id: String,
    pub name: String,
    pub description: Option<String>,
    /// JSON Schema that future instance auth requests must satisfy.
    pub instance_auth_request_input_schema: Option<String>,
    pub default_instance_auth: Option<Auth>,
}

impl Package {
    /// Replace every updatable field with the values from `update`.
    ///
    /// Absent optional values clear the stored ones.
    pub fn set_from_update_input(&mut self, update: &PackageUpdateInput) {
        self.name.clone_from(&update.name);
        self.description.clone_from(&update.description);
        self.instance_auth_request_input_schema
            .clone_from(&update.instance_auth_request_input_schema);
        self.default_instance_auth = update.default_instance_auth.as_ref().map(AuthInput::to_auth);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PackageCreateInput {
    pub name: String,
    pub description: Option<String>,
    pub instance_auth_request_input_schema: Option<String>,
    pub default_instance_auth: Option<AuthInput>,
    pub api_definitions: Vec<ApiDefinitionInput>,
    pub event_definitions: Vec<EventDefinitionInput>,
    pub documents: Vec<DocumentInput>,
}

impl PackageCreateInput {
    /// Materialize the package this input describes.
    ///
    /// Nested API, event, and document inputs are not part of the package
    /// row; callers create them separately.
    #[must_use]
    pub fn to_package(&self, id: &str, application_id: &str, tenant_id: &str) -> Package {
        Package {
            id: id.to_string(),
            tenant_id: tenant_id.to_string(),
            application_id: application_id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            instance_auth_request_input_schema: self.instance_auth_request_input_schema.clone(),
            default_instance_auth: self.default_instance_auth.as_ref().map(AuthInput::to_auth),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PackageUpdateInput {
    pub name: String,
    pub description: Option<String>,
    pub instance_auth_request_input_schema: Option<String>,
    pub default_instance_auth: Option<AuthInput>,
}

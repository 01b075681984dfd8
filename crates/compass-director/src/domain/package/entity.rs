use crate::nullable::NullableString;

/// A row of the `packages` table.
///
/// `default_instance_auth` holds the JSON-encoded [`compass_core::model::Auth`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub tenant_id: String,
    pub application_id: String,
    pub name: String,
    pub description: NullableString,
    pub default_instance_auth: NullableString,
    pub instance_auth_request_json_schema: NullableString,
}

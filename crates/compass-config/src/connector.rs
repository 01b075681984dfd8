//! Connector test client configuration.

use serde::{Deserialize, Serialize};

fn default_tenant() -> String {
    "testkit-tenant".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectorConfig {
    /// Value sent in the `Tenant` header.
    #[serde(default = "default_tenant")]
    pub tenant: String,

    /// Application the one-time tokens are requested for.
    #[serde(default)]
    pub application_id: String,

    /// Accept invalid TLS certificates (test clusters use self-signed ones).
    #[serde(default)]
    pub skip_verify: bool,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            tenant: default_tenant(),
            application_id: String::new(),
            skip_verify: false,
        }
    }
}

impl ConnectorConfig {
    /// Check if an application is set, which token requests need.
    pub fn is_configured(&self) -> bool {
        !self.application_id.is_empty()
    }
}

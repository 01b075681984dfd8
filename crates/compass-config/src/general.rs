//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tenant used by CLI commands when `--tenant` is not given.
    #[serde(default)]
    pub default_tenant: String,
}

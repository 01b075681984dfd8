use anyhow::Context;
use compass_config::CompassConfig;
use compass_director::DirectorDb;
use compass_director::domain::package::{self, DefaultConverter};
use compass_director::domain::scenario_assignment;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub db: DirectorDb,
    pub tenant: String,
    pub converter: DefaultConverter,
    pub packages: package::Repository<DefaultConverter>,
    pub assignments: scenario_assignment::Repository<scenario_assignment::Converter>,
}

impl AppContext {
    pub async fn init(config: CompassConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let tenant = resolve_tenant(flags.tenant.as_deref(), &config)?;
        let db = DirectorDb::open(&config.database)
            .await
            .with_context(|| format!("failed to open database at '{}'", config.database.path))?;

        tracing::debug!(tenant = %tenant, path = %config.database.path, "compass context ready");
        Ok(Self::from_db(db, tenant))
    }

    pub fn from_db(db: DirectorDb, tenant: String) -> Self {
        Self {
            db,
            tenant,
            converter: DefaultConverter::default(),
            packages: package::Repository::new(DefaultConverter::default()),
            assignments: scenario_assignment::Repository::new(scenario_assignment::Converter),
        }
    }
}

/// `--tenant` wins over `general.default_tenant`.
fn resolve_tenant(flag: Option<&str>, config: &CompassConfig) -> anyhow::Result<String> {
    flag.or_else(|| config.default_tenant())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .context("no tenant given: pass --tenant or set general.default_tenant")
}

#[cfg(test)]
mod tests {
    use compass_config::GeneralConfig;

    use super::*;

    fn config_with_tenant(tenant: Option<&str>) -> CompassConfig {
        CompassConfig {
            general: GeneralConfig {
                default_tenant: tenant.unwrap_or_default().to_string(),
            },
            ..CompassConfig::default()
        }
    }

    #[test]
    fn flag_overrides_config() {
        let config = config_with_tenant(Some("from-config"));
        assert_eq!(resolve_tenant(Some("from-flag"), &config).unwrap(), "from-flag");
    }

    #[test]
    fn falls_back_to_config() {
        let config = config_with_tenant(Some("from-config"));
        assert_eq!(resolve_tenant(None, &config).unwrap(), "from-config");
    }

    #[test]
    fn missing_tenant_is_error() {
        let err = resolve_tenant(None, &config_with_tenant(None)).unwrap_err();
        assert!(err.to_string().contains("--tenant"));
    }
}

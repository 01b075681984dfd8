//! Automatic scenario assignment repository.

use compass_core::model::{AutomaticScenarioAssignment, LabelSelector};

use super::converter::EntityConverter;
use super::entity::Entity;
use crate::DirectorDb;
use crate::error::DatabaseError;
use crate::helpers::is_unique_violation;

const TABLE: &str = "automatic_scenario_assignments";
const COLUMNS: &str = "scenario, tenant_id, selector_key, selector_value";

fn row_to_entity(row: &libsql::Row) -> Result<Entity, DatabaseError> {
    Ok(Entity {
        scenario: row.get(0)?,
        tenant_id: row.get(1)?,
        selector_key: row.get(2)?,
        selector_value: row.get(3)?,
    })
}

#[derive(Debug, Clone)]
pub struct Repository<C> {
    conv: C,
}

impl<C: EntityConverter> Repository<C> {
    pub const fn new(conv: C) -> Self {
        Self { conv }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotUnique` (wrapped) if the tenant already
    /// has an assignment for the scenario.
    pub async fn create(
        &self,
        db: &DirectorDb,
        model: &AutomaticScenarioAssignment,
    ) -> Result<(), DatabaseError> {
        let entity = self.conv.to_entity(model);

        tracing::debug!(scenario = %entity.scenario, tenant = %entity.tenant_id, "persisting scenario assignment");
        db.conn()
            .execute(
                &format!("INSERT INTO {TABLE} ({COLUMNS}) VALUES (?1, ?2, ?3, ?4)"),
                [
                    entity.scenario.as_str(),
                    entity.tenant_id.as_str(),
                    entity.selector_key.as_str(),
                    entity.selector_value.as_str(),
                ],
            )
            .await
            .map_err(|e| {
                let err = if is_unique_violation(&e) {
                    DatabaseError::NotUnique(format!("scenario '{}'", entity.scenario))
                } else {
                    DatabaseError::from(e)
                };
                err.wrap(format!("while inserting row to '{TABLE}' table"))
            })?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the tenant has no assignment for
    /// `scenario`.
    pub async fn get_for_scenario_name(
        &self,
        db: &DirectorDb,
        tenant: &str,
        scenario: &str,
    ) -> Result<AutomaticScenarioAssignment, DatabaseError> {
        let mut rows = db
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM {TABLE} WHERE tenant_id = ?1 AND scenario = ?2"),
                [tenant, scenario],
            )
            .await
            .map_err(|e| DatabaseError::from(e).wrap("while getting object from DB"))?;

        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(self.conv.from_entity(&row_to_entity(&row)?))
    }

    /// Every assignment of `tenant` whose selector matches exactly, ordered
    /// by scenario.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_for_selector(
        &self,
        db: &DirectorDb,
        selector: &LabelSelector,
        tenant: &str,
    ) -> Result<Vec<AutomaticScenarioAssignment>, DatabaseError> {
        self.list(db, selector, tenant).await.map_err(|e| {
            e.wrap("while fetching list of objects from DB")
                .wrap("while getting automatic scenario assignments from db")
        })
    }

    async fn list(
        &self,
        db: &DirectorDb,
        selector: &LabelSelector,
        tenant: &str,
    ) -> Result<Vec<AutomaticScenarioAssignment>, DatabaseError> {
        let mut rows = db
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM {TABLE} \
                     WHERE tenant_id = ?1 AND selector_key = ?2 AND selector_value = ?3 \
                     ORDER BY scenario"
                ),
                [tenant, selector.key.as_str(), selector.value.as_str()],
            )
            .await?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(self.conv.from_entity(&row_to_entity(&row)?));
        }
        Ok(out)
    }

    /// Returns the number of deleted assignments; zero is not an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_for_selector(
        &self,
        db: &DirectorDb,
        tenant: &str,
        selector: &LabelSelector,
    ) -> Result<u64, DatabaseError> {
        tracing::debug!(tenant, key = %selector.key, value = %selector.value, "deleting scenario assignments");
        db.conn()
            .execute(
                &format!(
                    "DELETE FROM {TABLE} WHERE tenant_id = ?1 AND selector_key = ?2 AND selector_value = ?3"
                ),
                [tenant, selector.key.as_str(), selector.value.as_str()],
            )
            .await
            .map_err(|e| DatabaseError::from(e).wrap("while deleting from database"))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails.
    pub async fn delete_for_scenario_name(
        &self,
        db: &DirectorDb,
        tenant: &str,
        scenario: &str,
    ) -> Result<u64, DatabaseError> {
        tracing::debug!(tenant, scenario, "deleting scenario assignment");
        db.conn()
            .execute(
                &format!("DELETE FROM {TABLE} WHERE tenant_id = ?1 AND scenario = ?2"),
                [tenant, scenario],
            )
            .await
            .map_err(|e| DatabaseError::from(e).wrap("while deleting from database"))
    }
}

//! Package repository.
//!
//! Stores converter rows in the `packages` table. Every statement is tenant
//! scoped.

use compass_core::model::Package;

use super::converter::Converter;
use super::entity::Entity;
use crate::DirectorDb;
use crate::domain::api::ApiConverter;
use crate::domain::auth::AuthConverter;
use crate::domain::document::DocumentConverter;
use crate::domain::event::EventConverter;
use crate::error::{ConvertError, DatabaseError};
use crate::helpers::{expect_affected, get_nullable_string};

const COLUMNS: &str = "id, tenant_id, app_id, name, description, default_instance_auth, \
                       instance_auth_request_json_schema";

/// Row/model conversion the repository depends on.
pub trait EntityConverter: Send + Sync {
    fn to_entity(&self, model: Option<&Package>) -> Result<Option<Entity>, ConvertError>;
    fn from_entity(&self, entity: Option<&Entity>) -> Result<Package, ConvertError>;
}

impl<A, P, E, D> EntityConverter for Converter<A, P, E, D>
where
    A: AuthConverter,
    P: ApiConverter,
    E: EventConverter,
    D: DocumentConverter,
{
    fn to_entity(&self, model: Option<&Package>) -> Result<Option<Entity>, ConvertError> {
        Self::to_entity(self, model)
    }

    fn from_entity(&self, entity: Option<&Entity>) -> Result<Package, ConvertError> {
        Self::from_entity(self, entity)
    }
}

fn row_to_entity(row: &libsql::Row) -> Result<Entity, DatabaseError> {
    Ok(Entity {
        id: row.get(0)?,
        tenant_id: row.get(1)?,
        application_id: row.get(2)?,
        name: row.get(3)?,
        description: get_nullable_string(row, 4)?,
        default_instance_auth: get_nullable_string(row, 5)?,
        instance_auth_request_json_schema: get_nullable_string(row, 6)?,
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

    /// Insert a package row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotUnique` if the ID is taken, or another
    /// `DatabaseError` if conversion or the insert fails.
    pub async fn create(&self, db: &DirectorDb, model: &Package) -> Result<(), DatabaseError> {
        let Some(entity) = self.conv.to_entity(Some(model))? else {
            return Ok(());
        };

        tracing::debug!(id = %entity.id, tenant = %entity.tenant_id, "persisting package");
        db.conn()
            .execute(
                &format!("INSERT INTO packages ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    entity.id.as_str(),
                    entity.tenant_id.as_str(),
                    entity.application_id.as_str(),
                    entity.name.as_str(),
                    entity.description.as_deref(),
                    entity.default_instance_auth.as_deref(),
                    entity.instance_auth_request_json_schema.as_deref(),
                ],
            )
            .await
            .map_err(|e| {
                if crate::helpers::is_unique_violation(&e) {
                    DatabaseError::NotUnique(format!("package '{}'", entity.id))
                } else {
                    DatabaseError::from(e)
                }
            })
            .map_err(|e| e.wrap("while inserting row to 'packages' table"))?;
        Ok(())
    }

    /// Fetch a package by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no package matches, or another
    /// `DatabaseError` if the query or conversion fails.
    pub async fn get_by_id(
        &self,
        db: &DirectorDb,
        tenant: &str,
        id: &str,
    ) -> Result<Package, DatabaseError> {
        let mut rows = db
            .conn()
            .query(
                &format!("SELECT {COLUMNS} FROM packages WHERE tenant_id = ?1 AND id = ?2"),
                [tenant, id],
            )
            .await
            .map_err(|e| DatabaseError::from(e).wrap("while getting object from DB"))?;

        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let entity = row_to_entity(&row)?;
        Ok(self.conv.from_entity(Some(&entity))?)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn exists(&self, db: &DirectorDb, tenant: &str, id: &str) -> Result<bool, DatabaseError> {
        let mut rows = db
            .conn()
            .query(
                "SELECT 1 FROM packages WHERE tenant_id = ?1 AND id = ?2",
                [tenant, id],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Packages owned by an application, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or a row conversion fails.
    pub async fn list_by_application_id(
        &self,
        db: &DirectorDb,
        tenant: &str,
        application_id: &str,
    ) -> Result<Vec<Package>, DatabaseError> {
        let mut rows = db
            .conn()
            .query(
                &format!(
                    "SELECT {COLUMNS} FROM packages WHERE tenant_id = ?1 AND app_id = ?2 \
                     ORDER BY name, id"
                ),
                [tenant, application_id],
            )
            .await
            .map_err(|e| {
                DatabaseError::from(e).wrap("while fetching list of objects from DB")
            })?;

        let mut packages = Vec::new();
        while let Some(row) = rows.next().await? {
            let entity = row_to_entity(&row)?;
            packages.push(self.conv.from_entity(Some(&entity))?);
        }
        Ok(packages)
    }

    /// Overwrite the updatable columns of an existing package.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the package does not exist.
    pub async fn update(&self, db: &DirectorDb, model: &Package) -> Result<(), DatabaseError> {
        let Some(entity) = self.conv.to_entity(Some(model))? else {
            return Ok(());
        };

        tracing::debug!(id = %entity.id, tenant = %entity.tenant_id, "updating package");
        let affected = db
            .conn()
            .execute(
                "UPDATE packages SET name = ?1, description = ?2, default_instance_auth = ?3, \
                 instance_auth_request_json_schema = ?4 WHERE tenant_id = ?5 AND id = ?6",
                libsql::params![
                    entity.name.as_str(),
                    entity.description.as_deref(),
                    entity.default_instance_auth.as_deref(),
                    entity.instance_auth_request_json_schema.as_deref(),
                    entity.tenant_id.as_str(),
                    entity.id.as_str(),
                ],
            )
            .await
            .map_err(|e| DatabaseError::from(e).wrap("while updating single entity"))?;
        expect_affected(affected)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the package does not exist.
    pub async fn delete(&self, db: &DirectorDb, tenant: &str, id: &str) -> Result<(), DatabaseError> {
        tracing::debug!(id, tenant, "deleting package");
        let affected = db
            .conn()
            .execute(
                "DELETE FROM packages WHERE tenant_id = ?1 AND id = ?2",
                [tenant, id],
            )
            .await
            .map_err(|e| DatabaseError::from(e).wrap("while deleting object from database"))?;
        expect_affected(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::package::DefaultConverter;
    use crate::test_support::fakes::FixedEntity;
    use compass_core::model::{Auth, BasicCredentialData, CredentialData};
    use pretty_assertions::assert_eq;

    async fn setup() -> (DirectorDb, Repository<DefaultConverter>) {
        let db = DirectorDb::open_local(":memory:").await.unwrap();
        (db, Repository::new(DefaultConverter::default()))
    }

    fn fix_package(id: &str, app: &str, name: &str) -> Package {
        Package {
            id: id.into(),
            tenant_id: "tenant-1".into(),
            application_id: app.into(),
            name: name.into(),
            description: None,
            instance_auth_request_input_schema: None,
            default_instance_auth: Some(Auth {
                credential: CredentialData {
                    basic: Some(BasicCredentialData {
                        username: "u".into(),
                        password: "p".into(),
                    }),
                    oauth: None,
                },
                ..Auth::default()
            }),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let (db, repo) = setup().await;
        let pkg = fix_package("pkg-1", "app-1", "payments");

        repo.create(&db, &pkg).await.unwrap();
        let got = repo.get_by_id(&db, "tenant-1", "pkg-1").await.unwrap();
        assert_eq!(got, pkg);
    }

    #[tokio::test]
    async fn get_is_tenant_scoped() {
        let (db, repo) = setup().await;
        repo.create(&db, &fix_package("pkg-1", "app-1", "payments"))
            .await
            .unwrap();

        let err = repo.get_by_id(&db, "tenant-2", "pkg-1").await.unwrap_err();
        assert!(err.is_no_result());
        assert!(!repo.exists(&db, "tenant-2", "pkg-1").await.unwrap());
        assert!(repo.exists(&db, "tenant-1", "pkg-1").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_id_is_not_unique() {
        let (db, repo) = setup().await;
        let pkg = fix_package("pkg-1", "app-1", "payments");
        repo.create(&db, &pkg).await.unwrap();

        let err = repo.create(&db, &pkg).await.unwrap_err();
        assert!(matches!(err.root_cause(), DatabaseError::NotUnique(_)));
    }

    #[tokio::test]
    async fn list_by_application_orders_by_name() {
        let (db, repo) = setup().await;
        for (id, app, name) in [
            ("pkg-1", "app-1", "zeta"),
            ("pkg-2", "app-1", "alpha"),
            ("pkg-3", "app-2", "beta"),
        ] {
            repo.create(&db, &fix_package(id, app, name)).await.unwrap();
        }

        let listed = repo
            .list_by_application_id(&db, "tenant-1", "app-1")
            .await
            .unwrap();
        let names: Vec<_> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let (db, repo) = setup().await;
        let mut pkg = fix_package("pkg-1", "app-1", "payments");
        repo.create(&db, &pkg).await.unwrap();

        pkg.name = "billing".into();
        pkg.description = Some("renamed".into());
        pkg.default_instance_auth = None;
        repo.update(&db, &pkg).await.unwrap();

        let got = repo.get_by_id(&db, "tenant-1", "pkg-1").await.unwrap();
        assert_eq!(got, pkg);
    }

    #[tokio::test]
    async fn update_missing_is_no_result() {
        let (db, repo) = setup().await;
        let err = repo
            .update(&db, &fix_package("missing", "app-1", "x"))
            .await
            .unwrap_err();
        assert!(err.is_no_result());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let (db, repo) = setup().await;
        repo.create(&db, &fix_package("pkg-1", "app-1", "payments"))
            .await
            .unwrap();

        repo.delete(&db, "tenant-1", "pkg-1").await.unwrap();
        assert!(!repo.exists(&db, "tenant-1", "pkg-1").await.unwrap());

        let err = repo.delete(&db, "tenant-1", "pkg-1").await.unwrap_err();
        assert!(err.is_no_result());
    }

    #[tokio::test]
    async fn converter_skipping_row_is_noop() {
        let db = DirectorDb::open_local(":memory:").await.unwrap();
        let repo = Repository::new(FixedEntity(None));

        repo.create(&db, &fix_package("pkg-1", "app-1", "payments"))
            .await
            .unwrap();
        assert!(!repo.exists(&db, "tenant-1", "pkg-1").await.unwrap());
    }

    #[tokio::test]
    async fn malformed_stored_auth_surfaces_convert_error() {
        let (db, repo) = setup().await;
        db.conn()
            .execute(
                "INSERT INTO packages (id, tenant_id, app_id, name, default_instance_auth) \
                 VALUES ('pkg-1', 'tenant-1', 'app-1', 'broken', '{oops')",
                (),
            )
            .await
            .unwrap();

        let err = repo.get_by_id(&db, "tenant-1", "pkg-1").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Convert(ConvertError::Json { .. })));
        assert!(
            err.to_string()
                .contains("while unmarshalling default instance auth")
        );
    }
}

//! # compass-director
//!
//! Package conversion and libSQL persistence for the Compass director.
//!
//! - [`domain::package`]: the three-way Package converter (persistence row,
//!   domain model, GraphQL) and its repository
//! - [`domain::auth`], [`domain::api`], [`domain::event`], [`domain::document`]:
//!   the collaborator converters the Package converter delegates to
//! - [`domain::scenario_assignment`]: automatic scenario assignment repository
//!
//! Repositories take the [`DirectorDb`] handle explicitly on every call and
//! hold no state besides their injected converter.

pub mod domain;
pub mod error;
pub mod helpers;
mod migrations;
pub mod nullable;

#[cfg(test)]
mod test_support;

use compass_config::DatabaseConfig;
use error::DatabaseError;
use libsql::Builder;

/// Central database handle for director persistence.
pub struct DirectorDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl DirectorDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        tracing::debug!(path, "opening director database");
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let director_db = Self { db, conn };
        director_db.run_migrations().await?;
        Ok(director_db)
    }

    /// Open the database described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the path is invalid or the database cannot
    /// be opened.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        config
            .validate()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
        Self::open_local(&config.path).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"pkg-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

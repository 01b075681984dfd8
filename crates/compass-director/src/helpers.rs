//! Row parsing and error classification helpers shared by the repositories.

use crate::error::DatabaseError;
use crate::nullable::NullableString;

/// Read a nullable TEXT column, keeping `NULL` and `""` distinct.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, so nullable
/// columns must go through `Option<String>`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_nullable_string(row: &libsql::Row, idx: i32) -> Result<NullableString, DatabaseError> {
    Ok(NullableString::from(row.get::<Option<String>>(idx)?))
}

/// Detect primary key and unique index violations.
///
/// libSQL surfaces these only through the `SQLite` error message.
pub fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

/// Fail with `NoResult` when a mutation touched no rows.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if `affected` is zero.
pub fn expect_affected(affected: u64) -> Result<(), DatabaseError> {
    if affected == 0 {
        return Err(DatabaseError::NoResult);
    }
    Ok(())
}

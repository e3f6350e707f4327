//! Error handling utilities for repositories

use favorites_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Convert SQLx error to DomainError, translating the named schema constraints
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.constraint() {
            Some("uq_user_favorites_url") => return DomainError::DuplicateUrl,
            Some("uq_user_favorites_sort_order") => return DomainError::DuplicateSortOrder,
            Some("uq_favorite_shares_access_key") => return DomainError::AccessKeyCollision,
            Some(
                "fk_user_favorites_user" | "fk_favorite_groups_user" | "fk_favorite_shares_user",
            ) => return DomainError::UnknownOwner,
            Some(
                "ck_user_favorites_title" | "ck_user_favorites_url" | "ck_favorite_groups_name",
            ) => return DomainError::validation(db_err.message().to_string()),
            _ => {}
        }
    }
    DomainError::DatabaseError(e.to_string())
}

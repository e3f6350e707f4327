//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{FavoriteId, GroupId, ShareId};

/// Caller-facing classification of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DuplicateUrl,
    DuplicateName,
    NotFound,
    Forbidden,
    InvalidTarget,
    Unauthorized,
    Gone,
    Internal,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(FavoriteId),

    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Share not found: {0}")]
    ShareNotFound(ShareId),

    /// Public lookup miss; carries no identifier on purpose
    #[error("Share not found")]
    UnknownAccessKey,

    #[error("Owner is not a known user")]
    UnknownOwner,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Duplicate sort order within owner's favorites")]
    DuplicateSortOrder,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Favorite with this URL already exists")]
    DuplicateUrl,

    #[error("Group name already in use: {0}")]
    DuplicateGroupName(String),

    #[error("Access key already in use")]
    AccessKeyCollision,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Favorites not owned by caller: {}", format_ids(.0))]
    ForeignFavorites(Vec<FavoriteId>),

    #[error("Share password is missing or incorrect")]
    IncorrectSharePassword,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Invalid target group: {0}")]
    InvalidTargetGroup(GroupId),

    #[error("Share has expired")]
    ShareExpired,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

fn format_ids(ids: &[FavoriteId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Classify the error for callers
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FavoriteNotFound(_)
            | Self::GroupNotFound(_)
            | Self::ShareNotFound(_)
            | Self::UnknownAccessKey
            | Self::UnknownOwner => ErrorKind::NotFound,

            Self::ValidationError(_) | Self::DuplicateSortOrder => ErrorKind::InvalidInput,

            Self::DuplicateUrl => ErrorKind::DuplicateUrl,
            Self::DuplicateGroupName(_) => ErrorKind::DuplicateName,

            Self::ForeignFavorites(_) => ErrorKind::Forbidden,
            Self::IncorrectSharePassword => ErrorKind::Unauthorized,
            Self::InvalidTargetGroup(_) => ErrorKind::InvalidTarget,
            Self::ShareExpired => ErrorKind::Gone,

            Self::AccessKeyCollision | Self::DatabaseError(_) | Self::InternalError(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::FavoriteNotFound(_) => "UNKNOWN_FAVORITE",
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::ShareNotFound(_) | Self::UnknownAccessKey => "UNKNOWN_SHARE",
            Self::UnknownOwner => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DuplicateSortOrder => "DUPLICATE_SORT_ORDER",

            // Conflict
            Self::DuplicateUrl => "DUPLICATE_URL",
            Self::DuplicateGroupName(_) => "DUPLICATE_NAME",
            Self::AccessKeyCollision => "ACCESS_KEY_COLLISION",

            // Authorization
            Self::ForeignFavorites(_) => "FORBIDDEN_FAVORITES",
            Self::IncorrectSharePassword => "INVALID_SHARE_PASSWORD",

            // Business Rules
            Self::InvalidTargetGroup(_) => "INVALID_TARGET_GROUP",
            Self::ShareExpired => "SHARE_EXPIRED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self.kind(), ErrorKind::Forbidden | ErrorKind::Unauthorized)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::DuplicateUrl | ErrorKind::DuplicateName)
    }
}

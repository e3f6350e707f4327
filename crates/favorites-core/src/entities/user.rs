//! User profile - the slice of the identity provider's user record this service reads

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Owner profile used to attribute shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: String,
    pub updated_at: DateTime<Utc>,
}

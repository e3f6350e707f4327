//! Share entity - a published, read-only snapshot of some favorites

use chrono::{DateTime, Utc};

use crate::value_objects::{AccessKey, FavoriteId, ShareId, UserId};

/// Share header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub id: ShareId,
    pub owner_id: UserId,
    pub access_key: AccessKey,
    pub title: String,
    pub description: Option<String>,
    /// Compared verbatim against the supplied password
    pub password: Option<String>,
    pub is_public: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Share {
    /// Check if the share has expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        if let Some(expires_at) = self.expires_at {
            now > expires_at
        } else {
            false
        }
    }

    /// Check if the share is password protected
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    /// Check a supplied password; unprotected shares accept anything
    pub fn password_matches(&self, supplied: Option<&str>) -> bool {
        match self.password.as_deref() {
            None => true,
            Some(expected) => supplied == Some(expected),
        }
    }
}

/// Input for publishing a share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShare {
    pub id: ShareId,
    pub owner_id: UserId,
    pub access_key: AccessKey,
    pub title: String,
    pub description: Option<String>,
    pub password: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Positions are assigned 1..n in this order
    pub favorite_ids: Vec<FavoriteId>,
    pub created_at: DateTime<Utc>,
}

impl NewShare {
    pub fn into_share(self) -> (Share, Vec<FavoriteId>) {
        let share = Share {
            id: self.id,
            owner_id: self.owner_id,
            access_key: self.access_key,
            title: self.title,
            description: self.description,
            password: self.password,
            is_public: true,
            expires_at: self.expires_at,
            view_count: 0,
            created_at: self.created_at,
            updated_at: self.created_at,
        };
        (share, self.favorite_ids)
    }
}

/// Share header with its item count, as listed to the owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSummary {
    pub share: Share,
    pub item_count: i64,
}

/// One favorite as seen through a share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFavorite {
    pub favorite_id: FavoriteId,
    pub position: i32,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Result of a successful public fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicShare {
    /// Header with `view_count` already including this fetch
    pub share: Share,
    pub owner_name: Option<String>,
    pub items: Vec<SharedFavorite>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn share(password: Option<&str>, expires_at: Option<DateTime<Utc>>) -> Share {
        let now = Utc::now();
        let (share, _) = NewShare {
            id: ShareId::new(),
            owner_id: UserId::new(),
            access_key: AccessKey::generate(AccessKey::DEFAULT_LENGTH),
            title: "Demo".to_string(),
            description: None,
            password: password.map(str::to_string),
            expires_at,
            favorite_ids: vec![],
            created_at: now,
        }
        .into_share();
        share
    }

    #[test]
    fn test_new_share_defaults() {
        let share = share(None, None);
        assert!(share.is_public);
        assert_eq!(share.view_count, 0);
        assert!(!share.has_password());
    }

    #[test]
    fn test_never_expires_without_deadline() {
        let share = share(None, None);
        assert!(!share.is_expired_at(Utc::now() + Duration::days(10_000)));
    }

    #[test]
    fn test_expired_after_deadline() {
        let deadline = Utc::now();
        let share = share(None, Some(deadline));
        assert!(!share.is_expired_at(deadline - Duration::seconds(1)));
        assert!(share.is_expired_at(deadline + Duration::seconds(1)));
    }

    #[test]
    fn test_password_matching_is_exact() {
        let share = share(Some("Secret"), None);
        assert!(share.has_password());
        assert!(share.password_matches(Some("Secret")));
        assert!(!share.password_matches(Some("secret")));
        assert!(!share.password_matches(Some("Secret ")));
        assert!(!share.password_matches(None));
    }

    #[test]
    fn test_unprotected_share_accepts_any_password() {
        let share = share(None, None);
        assert!(share.password_matches(None));
        assert!(share.password_matches(Some("whatever")));
    }
}

//! Typed identifiers
//!
//! Every row id is a random UUID (v4). Wrapping them in distinct types keeps a
//! `GroupId` from being passed where a `FavoriteId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Error when parsing an identifier from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            #[inline]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the inner UUID
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Parse from string representation
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| IdParseError::InvalidFormat)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id!(
    /// Identifier of an authenticated owner, issued by the identity provider
    UserId
);
uuid_id!(
    /// Identifier of a favorite entry
    FavoriteId
);
uuid_id!(
    /// Identifier of a favorite group
    GroupId
);
uuid_id!(
    /// Identifier of a share header
    ShareId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = FavoriteId::new();
        let b = FavoriteId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_roundtrip_through_display() {
        let id = GroupId::new();
        let parsed: GroupId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(UserId::parse("not-a-uuid"), Err(IdParseError::InvalidFormat));
        assert!(ShareId::parse("").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uuid = Uuid::parse_str("6f1c2d47-8f4e-4a43-9a8e-2f0d6c1b9e11").unwrap();
        let id = FavoriteId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6f1c2d47-8f4e-4a43-9a8e-2f0d6c1b9e11\"");

        let back: FavoriteId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

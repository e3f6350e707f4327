//! # favorites-core
//!
//! Domain layer containing entities, value objects, repository traits and the clock port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod clock;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::{
    CategoryCount, Favorite, FavoriteChanges, Group, GroupChanges, GroupDeletion, GroupWithCount,
    MemberDisposal, NewFavorite, NewGroup, NewShare, OrderAssignment, PublicShare, Share,
    SharedFavorite, ShareSummary, UserProfile,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    FavoriteRepository, GroupRepository, RepoResult, ShareRepository, UserRepository,
};
pub use value_objects::{AccessKey, FavoriteId, GroupId, IdParseError, ShareId, UserId};

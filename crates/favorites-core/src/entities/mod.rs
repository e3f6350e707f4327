//! Domain entities - core business objects

mod favorite;
mod group;
mod share;
mod user;

pub use favorite::{
    next_sort_order, CategoryCount, Favorite, FavoriteChanges, NewFavorite, OrderAssignment,
    MAX_SORT_ORDER,
};
pub use group::{GroupDeletion, Group, GroupChanges, GroupWithCount, MemberDisposal, NewGroup};
pub use share::{NewShare, PublicShare, Share, SharedFavorite, ShareSummary};
pub use user::UserProfile;

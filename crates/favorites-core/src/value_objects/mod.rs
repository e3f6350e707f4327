//! Value objects - immutable types that represent domain concepts

mod access_key;
mod ids;

pub use access_key::AccessKey;
pub use ids::{FavoriteId, GroupId, IdParseError, ShareId, UserId};

//! Database models - SQLx-compatible structs for PostgreSQL tables

mod favorite;
mod group;
mod share;

pub use favorite::{CategoryCountModel, FavoriteModel};
pub use group::{GroupModel, GroupWithCountModel};
pub use share::{ShareModel, ShareWithCountModel, SharedFavoriteModel};

//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in favorites-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod favorite;
mod group;
mod share;
mod user;

pub use favorite::PgFavoriteRepository;
pub use group::PgGroupRepository;
pub use share::PgShareRepository;
pub use user::PgUserRepository;

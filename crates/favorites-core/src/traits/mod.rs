//! Domain traits - repository interfaces

mod repositories;

pub use repositories::{
    FavoriteRepository, GroupRepository, RepoResult, ShareRepository, UserRepository,
};

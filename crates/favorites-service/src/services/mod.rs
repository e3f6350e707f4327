//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod category;
pub mod context;
pub mod error;
pub mod favorite;
pub mod group;
pub mod profile;
pub mod share;

// Re-export all services for convenience
pub use category::CategoryService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use group::GroupService;
pub use profile::ProfileService;
pub use share::ShareService;

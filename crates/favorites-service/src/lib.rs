//! # favorites-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    CategoryService, FavoriteService, GroupService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, ShareService,
};

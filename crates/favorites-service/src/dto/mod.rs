//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AssignGroupRequest, BatchAddFavoritesRequest, CheckFavoriteQuery, CreateFavoriteRequest,
    CreateGroupRequest, CreateShareRequest, DeleteGroupQuery, OrderEntry, PublicShareQuery,
    ReorderFavoritesRequest, SetFavoriteOrderRequest, SetShareVisibilityRequest,
    UpdateFavoriteRequest, UpdateGroupRequest, UpdateProfileRequest,
};

// Re-export commonly used response types
pub use responses::{
    BatchAddResponse, CategoryResponse, CheckFavoriteResponse,
    DeletedFavoriteResponse, DeletedGroupResponse, FavoriteResponse, GroupResponse,
    ProfileResponse, PublicShareResponse, ReorderResponse, ShareResponse,
    SharedFavoriteResponse,
};

pub use mappers::share_url;

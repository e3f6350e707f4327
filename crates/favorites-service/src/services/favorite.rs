//! Favorite service
//!
//! Handles the owner's ordered favorites: adding, editing, ordering and grouping.

use std::collections::HashSet;

use tracing::{info, instrument};
use validator::Validate;

use favorites_core::entities::{FavoriteChanges, NewFavorite, OrderAssignment};
use favorites_core::{DomainError, FavoriteId, UserId};

use crate::dto::requests::non_blank;
use crate::dto::{
    AssignGroupRequest, BatchAddFavoritesRequest, BatchAddResponse, CheckFavoriteResponse,
    CreateFavoriteRequest, DeletedFavoriteResponse, FavoriteResponse, ReorderFavoritesRequest,
    ReorderResponse, SetFavoriteOrderRequest, UpdateFavoriteRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Title and URL of a request, trimmed; both must be non-empty
fn required_fields(request: &CreateFavoriteRequest) -> Result<(String, String), DomainError> {
    let title = request.title.trim();
    let url = request.url.trim();
    if title.is_empty() {
        return Err(DomainError::validation("title is required"));
    }
    if url.is_empty() {
        return Err(DomainError::validation("url is required"));
    }
    Ok((title.to_string(), url.to_string()))
}

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the owner's favorites in display order
    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: UserId) -> ServiceResult<Vec<FavoriteResponse>> {
        let favorites = self.ctx.favorite_repo().list_by_owner(owner_id).await?;
        Ok(favorites.iter().map(FavoriteResponse::from).collect())
    }

    /// Add a favorite at the end of the owner's list
    #[instrument(skip(self, request))]
    pub async fn add(
        &self,
        owner_id: UserId,
        request: CreateFavoriteRequest,
    ) -> ServiceResult<FavoriteResponse> {
        let (title, url) = required_fields(&request)?;
        let draft = NewFavorite::new(owner_id, title, url, self.ctx.now())
            .with_icon(non_blank(request.icon))
            .with_description(non_blank(request.description))
            .with_category(non_blank(request.category));

        let favorite = self.ctx.favorite_repo().create(&draft).await?;

        info!(
            owner_id = %owner_id,
            favorite_id = %favorite.id,
            sort_order = favorite.sort_order,
            "Favorite added"
        );

        Ok(FavoriteResponse::from(favorite))
    }

    /// Add many favorites, skipping incomplete entries and known URLs
    #[instrument(skip(self, request), fields(entries = request.favorites.len()))]
    pub async fn batch_add(
        &self,
        owner_id: UserId,
        request: BatchAddFavoritesRequest,
    ) -> ServiceResult<BatchAddResponse> {
        let now = self.ctx.now();
        let drafts: Vec<NewFavorite> = request
            .favorites
            .into_iter()
            .filter(|entry| entry.validate().is_ok())
            .filter_map(|entry| {
                let (title, url) = required_fields(&entry).ok()?;
                Some(
                    NewFavorite::new(owner_id, title, url, now)
                        .with_icon(non_blank(entry.icon))
                        .with_description(non_blank(entry.description))
                        .with_category(non_blank(entry.category)),
                )
            })
            .collect();

        let created = self.ctx.favorite_repo().create_many(&drafts).await?;

        info!(
            owner_id = %owner_id,
            submitted = drafts.len(),
            added = created.len(),
            "Favorites batch added"
        );

        Ok(BatchAddResponse {
            added_count: created.len(),
            favorites: created.iter().map(FavoriteResponse::from).collect(),
        })
    }

    /// Replace the editable fields of a favorite
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        owner_id: UserId,
        favorite_id: FavoriteId,
        request: UpdateFavoriteRequest,
    ) -> ServiceResult<FavoriteResponse> {
        let (title, url) = required_fields(&request)?;
        let changes = FavoriteChanges {
            title,
            url,
            icon: non_blank(request.icon),
            description: non_blank(request.description),
            category: non_blank(request.category),
        };

        let favorite = self
            .ctx
            .favorite_repo()
            .update(owner_id, favorite_id, &changes, self.ctx.now())
            .await?
            .ok_or(DomainError::FavoriteNotFound(favorite_id))?;

        info!(owner_id = %owner_id, favorite_id = %favorite_id, "Favorite updated");

        Ok(FavoriteResponse::from(favorite))
    }

    /// Delete a favorite
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        owner_id: UserId,
        favorite_id: FavoriteId,
    ) -> ServiceResult<DeletedFavoriteResponse> {
        let title = self
            .ctx
            .favorite_repo()
            .delete(owner_id, favorite_id)
            .await?
            .ok_or(DomainError::FavoriteNotFound(favorite_id))?;

        info!(owner_id = %owner_id, favorite_id = %favorite_id, "Favorite deleted");

        Ok(DeletedFavoriteResponse {
            id: favorite_id,
            title,
        })
    }

    /// Check whether the owner already saved a URL
    #[instrument(skip(self))]
    pub async fn check_by_url(
        &self,
        owner_id: UserId,
        url: &str,
    ) -> ServiceResult<CheckFavoriteResponse> {
        let url = url.trim();
        if url.is_empty() {
            return Err(DomainError::validation("url is required").into());
        }

        let favorite_id = self.ctx.favorite_repo().find_by_url(owner_id, url).await?;

        Ok(CheckFavoriteResponse {
            is_favorited: favorite_id.is_some(),
            favorite_id,
        })
    }

    /// Apply explicit positions atomically
    ///
    /// Entries naming favorites the owner does not have are ignored.
    #[instrument(skip(self, request), fields(entries = request.orders.len()))]
    pub async fn reorder(
        &self,
        owner_id: UserId,
        request: ReorderFavoritesRequest,
    ) -> ServiceResult<ReorderResponse> {
        request.validate()?;

        let assignments: Vec<OrderAssignment> = request
            .orders
            .iter()
            .map(|entry| OrderAssignment::new(entry.id, entry.order))
            .collect();

        let updated = self
            .ctx
            .favorite_repo()
            .reorder(owner_id, &assignments, self.ctx.now())
            .await?;

        info!(owner_id = %owner_id, updated, "Favorites reordered");

        Ok(ReorderResponse { updated })
    }

    /// Put the listed favorites first, in the given order
    ///
    /// Listed favorites take positions `1..=n`. The rest keep their relative
    /// order after them, so every position stays unique.
    #[instrument(skip(self, request), fields(entries = request.favorite_ids.len()))]
    pub async fn set_order(
        &self,
        owner_id: UserId,
        request: SetFavoriteOrderRequest,
    ) -> ServiceResult<ReorderResponse> {
        let current = self.ctx.favorite_repo().list_by_owner(owner_id).await?;
        let owned: HashSet<FavoriteId> = current.iter().map(|f| f.id).collect();

        let mut placed = HashSet::new();
        let listed: Vec<FavoriteId> = request
            .favorite_ids
            .into_iter()
            .filter(|id| owned.contains(id) && placed.insert(*id))
            .collect();
        let rest: Vec<FavoriteId> = current
            .iter()
            .map(|f| f.id)
            .filter(|id| !placed.contains(id))
            .collect();

        let assignments: Vec<OrderAssignment> = listed
            .into_iter()
            .chain(rest)
            .zip(1..)
            .map(|(id, position)| OrderAssignment::new(id, position))
            .collect();

        let updated = self
            .ctx
            .favorite_repo()
            .reorder(owner_id, &assignments, self.ctx.now())
            .await?;

        info!(owner_id = %owner_id, updated, "Favorites order set");

        Ok(ReorderResponse { updated })
    }

    /// Move a favorite into one of the owner's groups, or out of any
    #[instrument(skip(self, request))]
    pub async fn assign_group(
        &self,
        owner_id: UserId,
        favorite_id: FavoriteId,
        request: AssignGroupRequest,
    ) -> ServiceResult<FavoriteResponse> {
        let favorite = self
            .ctx
            .favorite_repo()
            .assign_group(owner_id, favorite_id, request.group_id, self.ctx.now())
            .await?
            .ok_or(DomainError::FavoriteNotFound(favorite_id))?;

        info!(
            owner_id = %owner_id,
            favorite_id = %favorite_id,
            group_id = ?favorite.group_id,
            "Favorite group assigned"
        );

        Ok(FavoriteResponse::from(favorite))
    }
}

//! Category service
//!
//! Read-only aggregation of the free-form category labels on favorites.

use tracing::instrument;

use favorites_core::UserId;

use crate::dto::CategoryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Distinct categories with counts, most used first
    #[instrument(skip(self))]
    pub async fn list(&self, owner_id: UserId) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.favorite_repo().categories(owner_id).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}

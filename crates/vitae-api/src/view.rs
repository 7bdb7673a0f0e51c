//! Handler for `GET /accounts/:account_id/view`.
//!
//! Returns the display-ready [`ProfileView`]: the profile plus every
//! visible section collection, ordered and filtered for rendering.
//! References, resumes, and portfolio items are management-only and are
//! not part of the view.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use uuid::Uuid;
use vitae_core::{store::ProfileStore, view::ProfileView};

use crate::error::ApiError;

/// `GET /accounts/:account_id/view` — 404 if the account has no profile.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Path(account_id): Path<Uuid>,
) -> Result<Json<ProfileView>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let view = store
    .profile_view(account_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(view))
}

//! Handlers for `/profiles` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/profiles?account_id=<uuid>` | 404 if the account has no profile |
//! | `POST`   | `/profiles` | Body: [`NewProfile`]; returns 201 + profile |
//! | `GET`    | `/profiles/:id` | 404 if not found |
//! | `PUT`    | `/profiles/:id` | Body: [`ProfileChanges`]; replaces every mutable field |
//! | `DELETE` | `/profiles/:id` | 204; sections and skill links go with the profile |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use vitae_core::{
  profile::{NewProfile, Profile, ProfileChanges},
  store::ProfileStore,
};

use crate::error::ApiError;

// ─── By account ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ByAccountParams {
  pub account_id: Uuid,
}

/// `GET /profiles?account_id=<uuid>`
pub async fn by_account<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ByAccountParams>,
) -> Result<Json<Profile>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let account_id = params.account_id;
  let profile = store
    .profile_by_account(account_id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| {
      ApiError::NotFound(format!("no profile for account {account_id}"))
    })?;
  Ok(Json(profile))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /profiles` — returns 201 + the stored [`Profile`].
///
/// 409 if the account already has a profile or the email is taken.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(new_profile): Json<NewProfile>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let profile = store
    .create_profile(new_profile)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(profile)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /profiles/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let profile = store
    .profile(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("profile {id} not found")))?;
  Ok(Json(profile))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /profiles/:id` — body: [`ProfileChanges`].
///
/// Omitting `picture` (or sending `null`) resets it to the default.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(changes): Json<ProfileChanges>,
) -> Result<Json<Profile>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let profile = store
    .update_profile(id, changes)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profile))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /profiles/:id` — removes the profile and everything under it.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  store
    .delete_profile(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

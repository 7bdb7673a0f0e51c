//! Handlers for profile section endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST`   | `/profiles/:id/sections` | Body: tagged [`SectionValue`]; returns 201 + section |
//! | `GET`    | `/profiles/:id/sections/:kind` | All sections of one kind, storage order |
//! | `PUT`    | `/sections/:id` | Body: replacement [`SectionValue`] of the same kind |
//! | `DELETE` | `/sections/:kind/:id` | 204 |
//!
//! Section bodies are adjacently tagged, e.g.
//! `{"type":"skill","data":{"kind":"technical","name":"Rust"}}`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use uuid::Uuid;
use vitae_core::{
  section::{Section, SectionKind, SectionValue},
  store::ProfileStore,
};

use crate::error::ApiError;

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /profiles/:id/sections` — returns 201 + the stored [`Section`].
///
/// 404 if the profile does not exist, 400 if the value fails validation.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(profile_id): Path<Uuid>,
  Json(value): Json<SectionValue>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let section = store
    .add_section(profile_id, value)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(section)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /profiles/:id/sections/:kind`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Path((profile_id, kind)): Path<(Uuid, SectionKind)>,
) -> Result<Json<Vec<Section>>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let sections = store
    .sections(profile_id, kind)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(sections))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /sections/:id` — body is the full replacement [`SectionValue`].
///
/// The replacement must carry the same kind as the stored section; a
/// mismatched kind reads as the section not existing.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(value): Json<SectionValue>,
) -> Result<Json<Section>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let section = store
    .update_section(id, value)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(section))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /sections/:kind/:id`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path((kind, id)): Path<(SectionKind, Uuid)>,
) -> Result<StatusCode, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  store
    .remove_section(kind, id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

//! Handlers for skill-link endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/skills/:id/link` | Body: `{"kind":"experience","id":"<uuid>"}`; 204 |
//! | `POST` | `/skills/:id/unlink` | Same body; 204 whether or not the link existed |
//! | `GET`  | `/skills/linked?kind=<host-kind>&id=<uuid>` | Skills linked to one host, name order |
//!
//! Hosts are the section kinds a skill can attach to: `experience`,
//! `education`, or `project`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;
use vitae_core::{
  section::{Row, SkillHost, SkillValue},
  store::ProfileStore,
};

use crate::error::ApiError;

// ─── Link ─────────────────────────────────────────────────────────────────────

/// `POST /skills/:id/link` — attaches the skill to a host section.
///
/// Linking twice is a no-op. 404 if either end is missing.
pub async fn link<S>(
  State(store): State<Arc<S>>,
  Path(skill_id): Path<Uuid>,
  Json(host): Json<SkillHost>,
) -> Result<StatusCode, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  store
    .link_skill(host, skill_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Unlink ───────────────────────────────────────────────────────────────────

/// `POST /skills/:id/unlink` — detaches the skill from a host section.
pub async fn unlink<S>(
  State(store): State<Arc<S>>,
  Path(skill_id): Path<Uuid>,
  Json(host): Json<SkillHost>,
) -> Result<StatusCode, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  store
    .unlink_skill(host, skill_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Linked ───────────────────────────────────────────────────────────────────

/// The section kinds a skill can be linked to.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
  Experience,
  Education,
  Project,
}

impl HostKind {
  fn with_id(self, id: Uuid) -> SkillHost {
    match self {
      HostKind::Experience => SkillHost::Experience(id),
      HostKind::Education => SkillHost::Education(id),
      HostKind::Project => SkillHost::Project(id),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct LinkedParams {
  pub kind: HostKind,
  pub id:   Uuid,
}

/// `GET /skills/linked?kind=<host-kind>&id=<uuid>`
pub async fn linked<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<LinkedParams>,
) -> Result<Json<Vec<Row<SkillValue>>>, ApiError>
where
  S: ProfileStore,
  S::Error: Into<vitae_core::Error>,
{
  let skills = store
    .linked_skills(params.kind.with_id(params.id))
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(skills))
}

//! Profile — the thin root entity that owns every section.
//!
//! A profile holds only identity and contact metadata. The professional
//! history itself (positions, degrees, skills, …) lives in the section
//! collections and is assembled on read by the aggregated view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder picture reference used until the owner uploads a real one.
pub const DEFAULT_PICTURE: &str = "profile_pics/default.jpeg";

/// The root entity: one per account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
  pub profile_id: Uuid,
  /// Owning account, as issued by the external auth layer. An account has
  /// at most one profile.
  pub account_id: Uuid,
  /// Contact email; unique across all profiles.
  pub email:      String,
  pub bio:        Option<String>,
  /// Path reference into the media store; never raw bytes.
  pub picture:    String,
  /// Server-assigned at creation; never changes afterwards.
  pub created_at: DateTime<Utc>,
  /// Refreshed by the store on every profile-row mutation.
  pub updated_at: DateTime<Utc>,
}

/// Input to [`crate::store::ProfileStore::create_profile`].
///
/// The profile id and both timestamps are assigned by the store; a missing
/// `picture` falls back to [`DEFAULT_PICTURE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
  pub account_id: Uuid,
  pub email:      String,
  pub bio:        Option<String>,
  pub picture:    Option<String>,
}

/// Input to [`crate::store::ProfileStore::update_profile`].
///
/// Updates are whole-row: every mutable field is written exactly as given
/// (last write wins; the single-owner access pattern needs no optimistic
/// locking). The owning account and `created_at` are immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileChanges {
  pub email:   String,
  pub bio:     Option<String>,
  /// `None` resets the picture to [`DEFAULT_PICTURE`].
  pub picture: Option<String>,
}

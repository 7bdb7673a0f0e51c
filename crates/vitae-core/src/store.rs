//! Defines the [`ProfileStore`] trait, the interface between profile data
//! and the storage backend that holds it.

use std::future::Future;

use uuid::Uuid;

use crate::{
  profile::{NewProfile, Profile, ProfileChanges},
  section::{Row, Section, SectionKind, SectionValue, SkillHost, SkillValue},
  view::ProfileView,
};

/// Abstraction over a profile store backend.
///
/// Implementations own identifier assignment and timestamp maintenance:
/// callers never supply ids for new rows, and `updated_at` moves on every
/// profile write. Semantic failures (duplicates, missing rows, range
/// violations) surface as backend errors convertible into [`crate::Error`].
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ProfileStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Profiles ──────────────────────────────────────────────────────────

  /// Creates a profile. Fails with [`crate::Error::DuplicateAccount`] or
  /// [`crate::Error::DuplicateEmail`] when the account already holds a
  /// profile or the email is taken.
  fn create_profile(
    &self,
    profile: NewProfile,
  ) -> impl Future<Output = Result<Profile, Self::Error>> + Send + '_;

  /// Fetches a profile by id.
  fn profile(
    &self,
    profile_id: Uuid,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// Fetches the profile owned by an account.
  fn profile_by_account(
    &self,
    account_id: Uuid,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// Replaces a profile's mutable fields and bumps `updated_at`. Fails
  /// with [`crate::Error::ProfileNotFound`] or, when the new email is
  /// taken by another profile, [`crate::Error::DuplicateEmail`].
  fn update_profile(
    &self,
    profile_id: Uuid,
    changes: ProfileChanges,
  ) -> impl Future<Output = Result<Profile, Self::Error>> + Send + '_;

  /// Deletes a profile and every section and skill link under it. Fails
  /// with [`crate::Error::ProfileNotFound`].
  fn delete_profile(
    &self,
    profile_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Sections ──────────────────────────────────────────────────────────

  /// Adds a section under a profile, assigning its id. Fails with
  /// [`crate::Error::ProfileNotFound`] when the owning profile does not
  /// exist.
  fn add_section(
    &self,
    profile_id: Uuid,
    value: SectionValue,
  ) -> impl Future<Output = Result<Section, Self::Error>> + Send + '_;

  /// Replaces a section's payload wholesale. The variant of `value`
  /// names the collection searched; a miss fails with
  /// [`crate::Error::SectionNotFound`].
  fn update_section(
    &self,
    section_id: Uuid,
    value: SectionValue,
  ) -> impl Future<Output = Result<Section, Self::Error>> + Send + '_;

  /// Removes a section, dropping any skill links that reference it.
  /// Fails with [`crate::Error::SectionNotFound`].
  fn remove_section(
    &self,
    kind: SectionKind,
    section_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Lists one collection under a profile, in display order. Fails with
  /// [`crate::Error::ProfileNotFound`] when the profile does not exist.
  fn sections(
    &self,
    profile_id: Uuid,
    kind: SectionKind,
  ) -> impl Future<Output = Result<Vec<Section>, Self::Error>> + Send + '_;

  // ── Skill links ───────────────────────────────────────────────────────

  /// Attaches a skill to an experience, education or project. Idempotent;
  /// fails with [`crate::Error::SectionNotFound`] or
  /// [`crate::Error::SkillNotFound`] when either end is missing.
  fn link_skill(
    &self,
    host: SkillHost,
    skill_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Detaches a skill from its host. A link that never existed is not an
  /// error.
  fn unlink_skill(
    &self,
    host: SkillHost,
    skill_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Lists the skills attached to a host row, by name. Fails with
  /// [`crate::Error::SectionNotFound`] when the host is missing.
  fn linked_skills(
    &self,
    host: SkillHost,
  ) -> impl Future<Output = Result<Vec<Row<SkillValue>>, Self::Error>> + Send + '_;

  // ── Aggregation ───────────────────────────────────────────────────────

  /// Assembles the display-ready view of an account's profile. Fails
  /// with [`crate::Error::NoProfileForAccount`] when the account holds
  /// no profile.
  fn profile_view(
    &self,
    account_id: Uuid,
  ) -> impl Future<Output = Result<ProfileView, Self::Error>> + Send + '_;
}

//! Error types for `vitae-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("account {0} already has a profile")]
  DuplicateAccount(Uuid),

  #[error("email {0:?} already belongs to another profile")]
  DuplicateEmail(String),

  #[error("profile not found: {0}")]
  ProfileNotFound(Uuid),

  #[error("no profile exists for account {0}")]
  NoProfileForAccount(Uuid),

  #[error("section not found: {0}")]
  SectionNotFound(Uuid),

  #[error("skill not found: {0}")]
  SkillNotFound(Uuid),

  #[error("self-assessment percent {0} is outside 0..=100")]
  PercentOutOfRange(i32),

  /// A storage-backend fault surfaced through the store trait.
  #[error("storage backend error: {0}")]
  Backend(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

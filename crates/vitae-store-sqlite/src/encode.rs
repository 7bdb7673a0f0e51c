//! Conversions between domain types and their SQLite column encodings.
//!
//! Timestamps are stored as RFC 3339 strings and calendar dates as ISO
//! `YYYY-MM-DD`, so lexicographic comparison in SQL matches chronological
//! order. Choice fields are lowercase tokens, UUIDs hyphenated lowercase
//! strings. The `*_col` readers decode straight out of a [`rusqlite::Row`],
//! surfacing failures as [`rusqlite::Error::FromSqlConversionFailure`] so
//! they flow through the usual query plumbing.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use vitae_core::{
  profile::Profile,
  section::{LanguageLevel, SkillKind},
};

use crate::{Error, Result};

const DATE_FMT: &str = "%Y-%m-%d";

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Timestamps and dates ────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FMT).to_string() }

// ─── Choice fields ───────────────────────────────────────────────────────────

pub fn encode_skill_kind(k: SkillKind) -> &'static str {
  match k {
    SkillKind::Technical => "technical",
    SkillKind::Soft => "soft",
    SkillKind::Language => "language",
    SkillKind::Other => "other",
  }
}

pub fn encode_language_level(l: LanguageLevel) -> &'static str {
  match l {
    LanguageLevel::Beginner => "beginner",
    LanguageLevel::Basic => "basic",
    LanguageLevel::Medium => "medium",
    LanguageLevel::Intermediate => "intermediate",
    LanguageLevel::Advanced => "advanced",
    LanguageLevel::Native => "native",
  }
}

// ─── Row readers ─────────────────────────────────────────────────────────────

fn text_conversion_failure(
  idx: usize,
  err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
  rusqlite::Error::FromSqlConversionFailure(
    idx,
    rusqlite::types::Type::Text,
    Box::new(err),
  )
}

pub fn uuid_col(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Uuid> {
  let s: String = row.get(idx)?;
  Uuid::parse_str(&s).map_err(|e| text_conversion_failure(idx, e))
}

pub fn date_col(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<NaiveDate> {
  let s: String = row.get(idx)?;
  NaiveDate::parse_from_str(&s, DATE_FMT)
    .map_err(|e| text_conversion_failure(idx, e))
}

pub fn opt_date_col(
  row: &rusqlite::Row,
  idx: usize,
) -> rusqlite::Result<Option<NaiveDate>> {
  let s: Option<String> = row.get(idx)?;
  s.map(|s| {
    NaiveDate::parse_from_str(&s, DATE_FMT)
      .map_err(|e| text_conversion_failure(idx, e))
  })
  .transpose()
}

pub fn dt_col(
  row: &rusqlite::Row,
  idx: usize,
) -> rusqlite::Result<DateTime<Utc>> {
  let s: String = row.get(idx)?;
  DateTime::parse_from_rfc3339(&s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| text_conversion_failure(idx, e))
}

pub fn skill_kind_col(
  row: &rusqlite::Row,
  idx: usize,
) -> rusqlite::Result<SkillKind> {
  let s: String = row.get(idx)?;
  match s.as_str() {
    "technical" => Ok(SkillKind::Technical),
    "soft" => Ok(SkillKind::Soft),
    "language" => Ok(SkillKind::Language),
    "other" => Ok(SkillKind::Other),
    other => Err(rusqlite::Error::FromSqlConversionFailure(
      idx,
      rusqlite::types::Type::Text,
      format!("unknown skill kind: {other:?}").into(),
    )),
  }
}

pub fn language_level_col(
  row: &rusqlite::Row,
  idx: usize,
) -> rusqlite::Result<LanguageLevel> {
  let s: String = row.get(idx)?;
  match s.as_str() {
    "beginner" => Ok(LanguageLevel::Beginner),
    "basic" => Ok(LanguageLevel::Basic),
    "medium" => Ok(LanguageLevel::Medium),
    "intermediate" => Ok(LanguageLevel::Intermediate),
    "advanced" => Ok(LanguageLevel::Advanced),
    "native" => Ok(LanguageLevel::Native),
    other => Err(rusqlite::Error::FromSqlConversionFailure(
      idx,
      rusqlite::types::Type::Text,
      format!("unknown language level: {other:?}").into(),
    )),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `profiles` row.
pub struct RawProfile {
  pub profile_id: String,
  pub account_id: String,
  pub email:      String,
  pub bio:        Option<String>,
  pub picture:    String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawProfile {
  pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
    Ok(RawProfile {
      profile_id: row.get(0)?,
      account_id: row.get(1)?,
      email:      row.get(2)?,
      bio:        row.get(3)?,
      picture:    row.get(4)?,
      created_at: row.get(5)?,
      updated_at: row.get(6)?,
    })
  }

  pub fn into_profile(self) -> Result<Profile> {
    Ok(Profile {
      profile_id: decode_uuid(&self.profile_id)?,
      account_id: decode_uuid(&self.account_id)?,
      email:      self.email,
      bio:        self.bio,
      picture:    self.picture,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

//! [`SqliteStore`] — the SQLite implementation of [`ProfileStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use vitae_core::{
  profile::{DEFAULT_PICTURE, NewProfile, Profile, ProfileChanges},
  section::{
    AwardValue, CertificationValue, EducationValue, ExperienceValue,
    InterestValue, LanguageValue, ProjectValue, Row, Section, SectionKind,
    SectionValue, SkillHost, SkillValue, SocialLinkValue, VolunteerValue,
  },
  store::ProfileStore,
  view::ProfileView,
};

use crate::{
  encode::{decode_uuid, encode_dt, encode_uuid, RawProfile},
  schema::SCHEMA,
  sections, Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A profile store backed by a single SQLite file.
///
/// Clones share one reference-counted connection, so handing copies to
/// async handlers is cheap.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database at `path` and apply the schema.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open a fresh in-memory store; the test suites run on this.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch one profile row with a caller-supplied WHERE clause.
  async fn profile_row(
    &self,
    sql: &'static str,
    key: String,
  ) -> Result<Option<Profile>> {
    let raw: Option<RawProfile> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(sql, rusqlite::params![key], RawProfile::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawProfile::into_profile).transpose()
  }
}

fn profile_exists(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM profiles WHERE profile_id = ?1",
        rusqlite::params![profile_id],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

/// Everything the aggregated view needs, read in one connection call.
struct RawView {
  profile:               RawProfile,
  experiences:           Vec<Row<ExperienceValue>>,
  educations:            Vec<Row<EducationValue>>,
  skills:                Vec<Row<SkillValue>>,
  projects:              Vec<Row<ProjectValue>>,
  certifications:        Vec<Row<CertificationValue>>,
  awards:                Vec<Row<AwardValue>>,
  languages:             Vec<Row<LanguageValue>>,
  interests:             Vec<Row<InterestValue>>,
  social_links:          Vec<Row<SocialLinkValue>>,
  volunteer_experiences: Vec<Row<VolunteerValue>>,
}

// ─── ProfileStore impl ───────────────────────────────────────────────────────

impl ProfileStore for SqliteStore {
  type Error = Error;

  // ── Profiles ──────────────────────────────────────────────────────────────

  async fn create_profile(&self, input: NewProfile) -> Result<Profile> {
    let account_str = encode_uuid(input.account_id);
    let email_probe = input.email.clone();

    let (account_taken, email_taken): (bool, bool) = self
      .conn
      .call(move |conn| {
        let account_taken: bool = conn
          .query_row(
            "SELECT 1 FROM profiles WHERE account_id = ?1",
            rusqlite::params![account_str],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        let email_taken: bool = conn
          .query_row(
            "SELECT 1 FROM profiles WHERE email = ?1",
            rusqlite::params![email_probe],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        Ok((account_taken, email_taken))
      })
      .await?;

    if account_taken {
      return Err(vitae_core::Error::DuplicateAccount(input.account_id).into());
    }
    if email_taken {
      return Err(vitae_core::Error::DuplicateEmail(input.email).into());
    }

    let now = Utc::now();
    let profile = Profile {
      profile_id: Uuid::new_v4(),
      account_id: input.account_id,
      email:      input.email,
      bio:        input.bio,
      picture:    input.picture.unwrap_or_else(|| DEFAULT_PICTURE.to_owned()),
      created_at: now,
      updated_at: now,
    };

    let id_str      = encode_uuid(profile.profile_id);
    let account_str = encode_uuid(profile.account_id);
    let email       = profile.email.clone();
    let bio         = profile.bio.clone();
    let picture     = profile.picture.clone();
    let at_str      = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO profiles (
             profile_id, account_id, email, bio, picture, created_at,
             updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
          rusqlite::params![id_str, account_str, email, bio, picture, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(profile)
  }

  async fn profile(&self, profile_id: Uuid) -> Result<Option<Profile>> {
    self
      .profile_row(
        "SELECT profile_id, account_id, email, bio, picture, created_at,
                updated_at
         FROM profiles WHERE profile_id = ?1",
        encode_uuid(profile_id),
      )
      .await
  }

  async fn profile_by_account(
    &self,
    account_id: Uuid,
  ) -> Result<Option<Profile>> {
    self
      .profile_row(
        "SELECT profile_id, account_id, email, bio, picture, created_at,
                updated_at
         FROM profiles WHERE account_id = ?1",
        encode_uuid(account_id),
      )
      .await
  }

  async fn update_profile(
    &self,
    profile_id: Uuid,
    changes: ProfileChanges,
  ) -> Result<Profile> {
    let existing = self
      .profile(profile_id)
      .await?
      .ok_or(vitae_core::Error::ProfileNotFound(profile_id))?;

    let id_str = encode_uuid(profile_id);
    let email_probe = changes.email.clone();

    let email_taken: bool = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT 1 FROM profiles WHERE email = ?1 AND profile_id != ?2",
              rusqlite::params![email_probe, id_str],
              |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false),
        )
      })
      .await?;

    if email_taken {
      return Err(vitae_core::Error::DuplicateEmail(changes.email).into());
    }

    let updated = Profile {
      email: changes.email,
      bio: changes.bio,
      picture: changes
        .picture
        .unwrap_or_else(|| DEFAULT_PICTURE.to_owned()),
      updated_at: Utc::now(),
      ..existing
    };

    let id_str  = encode_uuid(profile_id);
    let email   = updated.email.clone();
    let bio     = updated.bio.clone();
    let picture = updated.picture.clone();
    let at_str  = encode_dt(updated.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE profiles
           SET email = ?2, bio = ?3, picture = ?4, updated_at = ?5
           WHERE profile_id = ?1",
          rusqlite::params![id_str, email, bio, picture, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(updated)
  }

  async fn delete_profile(&self, profile_id: Uuid) -> Result<()> {
    let id_str = encode_uuid(profile_id);

    // sections and skill links go with the profile via ON DELETE CASCADE
    let deleted: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM profiles WHERE profile_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if deleted == 0 {
      return Err(vitae_core::Error::ProfileNotFound(profile_id).into());
    }
    Ok(())
  }

  // ── Sections ──────────────────────────────────────────────────────────────

  async fn add_section(
    &self,
    profile_id: Uuid,
    mut value: SectionValue,
  ) -> Result<Section> {
    value.validate()?;

    // attachment timestamps are server-assigned
    if let SectionValue::Resume(resume) = &mut value {
      resume.uploaded_at = Utc::now();
    }

    let row = Section {
      section_id: Uuid::new_v4(),
      profile_id,
      value,
    };

    let id_str = encode_uuid(profile_id);
    let to_insert = row.clone();

    let inserted: bool = self
      .conn
      .call(move |conn| {
        if !profile_exists(conn, &id_str)? {
          return Ok(false);
        }
        sections::insert(conn, &to_insert)?;
        Ok(true)
      })
      .await?;

    if !inserted {
      return Err(vitae_core::Error::ProfileNotFound(profile_id).into());
    }
    Ok(row)
  }

  async fn update_section(
    &self,
    section_id: Uuid,
    mut value: SectionValue,
  ) -> Result<Section> {
    value.validate()?;

    if let SectionValue::Resume(resume) = &mut value {
      resume.uploaded_at = Utc::now();
    }

    let kind = value.kind();
    let id_str = encode_uuid(section_id);
    let to_write = value.clone();

    let owner: Option<String> = self
      .conn
      .call(move |conn| match sections::owner(conn, kind, &id_str)? {
        Some(owner) => {
          sections::update(conn, &id_str, &to_write)?;
          Ok(Some(owner))
        }
        None => Ok(None),
      })
      .await?;

    let profile_id = match owner {
      Some(s) => decode_uuid(&s)?,
      None => {
        return Err(vitae_core::Error::SectionNotFound(section_id).into());
      }
    };

    Ok(Section {
      section_id,
      profile_id,
      value,
    })
  }

  async fn remove_section(
    &self,
    kind: SectionKind,
    section_id: Uuid,
  ) -> Result<()> {
    let id_str = encode_uuid(section_id);

    let deleted: usize = self
      .conn
      .call(move |conn| Ok(sections::delete(conn, kind, &id_str)?))
      .await?;

    if deleted == 0 {
      return Err(vitae_core::Error::SectionNotFound(section_id).into());
    }
    Ok(())
  }

  async fn sections(
    &self,
    profile_id: Uuid,
    kind: SectionKind,
  ) -> Result<Vec<Section>> {
    let id_str = encode_uuid(profile_id);

    let rows: Option<Vec<Section>> = self
      .conn
      .call(move |conn| {
        if !profile_exists(conn, &id_str)? {
          return Ok(None);
        }
        Ok(Some(sections::list(conn, &id_str, kind)?))
      })
      .await?;

    rows.ok_or_else(|| vitae_core::Error::ProfileNotFound(profile_id).into())
  }

  // ── Skill links ───────────────────────────────────────────────────────────

  async fn link_skill(&self, host: SkillHost, skill_id: Uuid) -> Result<()> {
    let host_id_str = encode_uuid(host.id());
    let skill_id_str = encode_uuid(skill_id);

    let (host_exists, skill_exists): (bool, bool) = self
      .conn
      .call(move |conn| {
        let host_exists =
          sections::owner(conn, host.kind(), &host_id_str)?.is_some();
        let skill_exists =
          sections::owner(conn, SectionKind::Skill, &skill_id_str)?.is_some();

        if host_exists && skill_exists {
          let (link, col) = sections::link_table(host);
          conn.execute(
            &format!(
              "INSERT OR IGNORE INTO {link} ({col}, skill_id) VALUES (?1, ?2)"
            ),
            rusqlite::params![host_id_str, skill_id_str],
          )?;
        }

        Ok((host_exists, skill_exists))
      })
      .await?;

    if !host_exists {
      return Err(vitae_core::Error::SectionNotFound(host.id()).into());
    }
    if !skill_exists {
      return Err(vitae_core::Error::SkillNotFound(skill_id).into());
    }
    Ok(())
  }

  async fn unlink_skill(&self, host: SkillHost, skill_id: Uuid) -> Result<()> {
    let host_id_str = encode_uuid(host.id());
    let skill_id_str = encode_uuid(skill_id);

    self
      .conn
      .call(move |conn| {
        let (link, col) = sections::link_table(host);
        conn.execute(
          &format!("DELETE FROM {link} WHERE {col} = ?1 AND skill_id = ?2"),
          rusqlite::params![host_id_str, skill_id_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn linked_skills(
    &self,
    host: SkillHost,
  ) -> Result<Vec<Row<SkillValue>>> {
    let host_id_str = encode_uuid(host.id());

    let rows: Option<Vec<Row<SkillValue>>> = self
      .conn
      .call(move |conn| {
        if sections::owner(conn, host.kind(), &host_id_str)?.is_none() {
          return Ok(None);
        }
        Ok(Some(sections::list_linked_skills(conn, host, &host_id_str)?))
      })
      .await?;

    rows.ok_or_else(|| vitae_core::Error::SectionNotFound(host.id()).into())
  }

  // ── Aggregation ───────────────────────────────────────────────────────────

  async fn profile_view(&self, account_id: Uuid) -> Result<ProfileView> {
    let account_str = encode_uuid(account_id);

    let raw: Option<RawView> = self
      .conn
      .call(move |conn| {
        let raw_profile = conn
          .query_row(
            "SELECT profile_id, account_id, email, bio, picture, created_at,
                    updated_at
             FROM profiles WHERE account_id = ?1",
            rusqlite::params![account_str],
            RawProfile::from_row,
          )
          .optional()?;

        let raw_profile = match raw_profile {
          Some(p) => p,
          None => return Ok(None),
        };

        let pid = raw_profile.profile_id.clone();

        Ok(Some(RawView {
          experiences: sections::list_experiences(conn, &pid)?,
          educations: sections::list_educations(conn, &pid)?,
          skills: sections::list_skills(conn, &pid)?,
          // the aggregated page shows public projects only
          projects: sections::list_projects(conn, &pid)?
            .into_iter()
            .filter(|p| p.value.is_public)
            .collect(),
          certifications: sections::list_certifications(conn, &pid)?,
          awards: sections::list_awards(conn, &pid)?,
          languages: sections::list_languages(conn, &pid)?,
          interests: sections::list_interests(conn, &pid)?,
          social_links: sections::list_social_links(conn, &pid)?,
          volunteer_experiences: sections::list_volunteer_experiences(
            conn, &pid,
          )?,
          profile: raw_profile,
        }))
      })
      .await?;

    let raw = match raw {
      Some(r) => r,
      None => {
        return Err(vitae_core::Error::NoProfileForAccount(account_id).into());
      }
    };

    Ok(ProfileView {
      profile:               raw.profile.into_profile()?,
      experiences:           raw.experiences,
      educations:            raw.educations,
      skills:                raw.skills,
      projects:              raw.projects,
      certifications:        raw.certifications,
      awards:                raw.awards,
      languages:             raw.languages,
      interests:             raw.interests,
      social_links:          raw.social_links,
      volunteer_experiences: raw.volunteer_experiences,
    })
  }
}

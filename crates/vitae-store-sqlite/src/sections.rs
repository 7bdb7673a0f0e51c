//! Per-kind SQL for section rows.
//!
//! Each [`SectionKind`] has its own table, so this module is where the
//! tagged union meets the relational schema: one INSERT/UPDATE pair per
//! kind on the way in, one row mapper per kind on the way out. Listings
//! come back in display order straight from `ORDER BY`, with `rowid` as
//! the insertion-order tiebreaker throughout.

use rusqlite::OptionalExtension as _;
use vitae_core::section::{
  AwardValue, CertificationValue, EducationValue, ExperienceValue,
  InterestValue, LanguageValue, PortfolioItemValue, ProjectValue,
  ReferenceValue, ResumeValue, Row, Section, SectionKind, SectionValue,
  SkillHost, SkillValue, SocialLinkValue, VolunteerValue,
};

use crate::encode::{
  date_col, dt_col, encode_date, encode_dt, encode_language_level,
  encode_skill_kind, encode_uuid, language_level_col, opt_date_col,
  skill_kind_col, uuid_col,
};

/// The table holding rows of a given kind.
pub const fn table(kind: SectionKind) -> &'static str {
  match kind {
    SectionKind::Experience => "experiences",
    SectionKind::Education => "educations",
    SectionKind::Skill => "skills",
    SectionKind::Project => "projects",
    SectionKind::Certification => "certifications",
    SectionKind::Award => "awards",
    SectionKind::Language => "languages",
    SectionKind::Interest => "interests",
    SectionKind::Reference => "referees",
    SectionKind::SocialLink => "social_links",
    SectionKind::Resume => "resumes",
    SectionKind::PortfolioItem => "portfolio_items",
    SectionKind::Volunteer => "volunteer_experiences",
  }
}

/// The link table and host column for a skill association.
pub const fn link_table(host: SkillHost) -> (&'static str, &'static str) {
  match host {
    SkillHost::Experience(_) => ("experience_skills", "experience_id"),
    SkillHost::Education(_) => ("education_skills", "education_id"),
    SkillHost::Project(_) => ("project_skills", "project_id"),
  }
}

// ─── Writes ──────────────────────────────────────────────────────────────────

/// Insert a fully-built [`Section`] into its kind's table.
pub fn insert(
  conn: &rusqlite::Connection,
  row: &Section,
) -> rusqlite::Result<()> {
  let id = encode_uuid(row.section_id);
  let pid = encode_uuid(row.profile_id);

  match &row.value {
    SectionValue::Experience(v) => {
      let start = encode_date(v.start_date);
      let end = v.end_date.map(encode_date);
      conn.execute(
        "INSERT INTO experiences (
           section_id, profile_id, title, company, company_link,
           start_date, end_date, is_current, description
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
          id,
          pid,
          v.title,
          v.company,
          v.company_link,
          start,
          end,
          v.is_current,
          v.description,
        ],
      )?;
    }
    SectionValue::Education(v) => {
      conn.execute(
        "INSERT INTO educations (
           section_id, profile_id, institution, degree, field_of_study,
           start_year, end_year, is_current, description, focus,
           institution_link
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        rusqlite::params![
          id,
          pid,
          v.institution,
          v.degree,
          v.field_of_study,
          v.start_year,
          v.end_year,
          v.is_current,
          v.description,
          v.focus,
          v.institution_link,
        ],
      )?;
    }
    SectionValue::Skill(v) => {
      let kind = encode_skill_kind(v.kind);
      conn.execute(
        "INSERT INTO skills (
           section_id, profile_id, kind, name, self_assessment_percent,
           months_of_experience
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
          id,
          pid,
          kind,
          v.name,
          v.self_assessment_percent,
          v.months_of_experience,
        ],
      )?;
    }
    SectionValue::Project(v) => {
      conn.execute(
        "INSERT INTO projects (
           section_id, profile_id, name, description, is_public, is_alone,
           is_finished, link
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
          id,
          pid,
          v.name,
          v.description,
          v.is_public,
          v.is_alone,
          v.is_finished,
          v.link,
        ],
      )?;
    }
    SectionValue::Certification(v) => {
      let issued = encode_date(v.issue_date);
      let expires = v.expiration_date.map(encode_date);
      conn.execute(
        "INSERT INTO certifications (
           section_id, profile_id, name, issuing_organization, issue_date,
           expiration_date, do_expire, credential_id, credential_url
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        rusqlite::params![
          id,
          pid,
          v.name,
          v.issuing_organization,
          issued,
          expires,
          v.do_expire,
          v.credential_id,
          v.credential_url,
        ],
      )?;
    }
    SectionValue::Award(v) => {
      let received = encode_date(v.date_received);
      conn.execute(
        "INSERT INTO awards (
           section_id, profile_id, title, issuer, date_received,
           description, award_url
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
          id,
          pid,
          v.title,
          v.issuer,
          received,
          v.description,
          v.award_url,
        ],
      )?;
    }
    SectionValue::Language(v) => {
      let level = encode_language_level(v.level);
      conn.execute(
        "INSERT INTO languages (section_id, profile_id, name, level)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![id, pid, v.name, level],
      )?;
    }
    SectionValue::Interest(v) => {
      conn.execute(
        "INSERT INTO interests (section_id, profile_id, name)
         VALUES (?1, ?2, ?3)",
        rusqlite::params![id, pid, v.name],
      )?;
    }
    SectionValue::Reference(v) => {
      conn.execute(
        "INSERT INTO referees (
           section_id, profile_id, name, contact_info, relationship
         ) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![id, pid, v.name, v.contact_info, v.relationship],
      )?;
    }
    SectionValue::SocialLink(v) => {
      conn.execute(
        "INSERT INTO social_links (section_id, profile_id, platform, url)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![id, pid, v.platform, v.url],
      )?;
    }
    SectionValue::Resume(v) => {
      let uploaded = encode_dt(v.uploaded_at);
      conn.execute(
        "INSERT INTO resumes (section_id, profile_id, file, uploaded_at)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![id, pid, v.file, uploaded],
      )?;
    }
    SectionValue::PortfolioItem(v) => {
      conn.execute(
        "INSERT INTO portfolio_items (
           section_id, profile_id, title, description, link, image
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![id, pid, v.title, v.description, v.link, v.image],
      )?;
    }
    SectionValue::Volunteer(v) => {
      let start = encode_date(v.start_date);
      let end = v.end_date.map(encode_date);
      conn.execute(
        "INSERT INTO volunteer_experiences (
           section_id, profile_id, organization, role, start_date,
           end_date, description
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
          id,
          pid,
          v.organization,
          v.role,
          start,
          end,
          v.description,
        ],
      )?;
    }
  }

  Ok(())
}

/// Replace every value column of an existing row. Returns the number of
/// rows changed (0 when the id is absent from the kind's table).
pub fn update(
  conn: &rusqlite::Connection,
  section_id: &str,
  value: &SectionValue,
) -> rusqlite::Result<usize> {
  match value {
    SectionValue::Experience(v) => {
      let start = encode_date(v.start_date);
      let end = v.end_date.map(encode_date);
      conn.execute(
        "UPDATE experiences SET
           title = ?2, company = ?3, company_link = ?4, start_date = ?5,
           end_date = ?6, is_current = ?7, description = ?8
         WHERE section_id = ?1",
        rusqlite::params![
          section_id,
          v.title,
          v.company,
          v.company_link,
          start,
          end,
          v.is_current,
          v.description,
        ],
      )
    }
    SectionValue::Education(v) => conn.execute(
      "UPDATE educations SET
         institution = ?2, degree = ?3, field_of_study = ?4,
         start_year = ?5, end_year = ?6, is_current = ?7, description = ?8,
         focus = ?9, institution_link = ?10
       WHERE section_id = ?1",
      rusqlite::params![
        section_id,
        v.institution,
        v.degree,
        v.field_of_study,
        v.start_year,
        v.end_year,
        v.is_current,
        v.description,
        v.focus,
        v.institution_link,
      ],
    ),
    SectionValue::Skill(v) => {
      let kind = encode_skill_kind(v.kind);
      conn.execute(
        "UPDATE skills SET
           kind = ?2, name = ?3, self_assessment_percent = ?4,
           months_of_experience = ?5
         WHERE section_id = ?1",
        rusqlite::params![
          section_id,
          kind,
          v.name,
          v.self_assessment_percent,
          v.months_of_experience,
        ],
      )
    }
    SectionValue::Project(v) => conn.execute(
      "UPDATE projects SET
         name = ?2, description = ?3, is_public = ?4, is_alone = ?5,
         is_finished = ?6, link = ?7
       WHERE section_id = ?1",
      rusqlite::params![
        section_id,
        v.name,
        v.description,
        v.is_public,
        v.is_alone,
        v.is_finished,
        v.link,
      ],
    ),
    SectionValue::Certification(v) => {
      let issued = encode_date(v.issue_date);
      let expires = v.expiration_date.map(encode_date);
      conn.execute(
        "UPDATE certifications SET
           name = ?2, issuing_organization = ?3, issue_date = ?4,
           expiration_date = ?5, do_expire = ?6, credential_id = ?7,
           credential_url = ?8
         WHERE section_id = ?1",
        rusqlite::params![
          section_id,
          v.name,
          v.issuing_organization,
          issued,
          expires,
          v.do_expire,
          v.credential_id,
          v.credential_url,
        ],
      )
    }
    SectionValue::Award(v) => {
      let received = encode_date(v.date_received);
      conn.execute(
        "UPDATE awards SET
           title = ?2, issuer = ?3, date_received = ?4, description = ?5,
           award_url = ?6
         WHERE section_id = ?1",
        rusqlite::params![
          section_id,
          v.title,
          v.issuer,
          received,
          v.description,
          v.award_url,
        ],
      )
    }
    SectionValue::Language(v) => {
      let level = encode_language_level(v.level);
      conn.execute(
        "UPDATE languages SET name = ?2, level = ?3 WHERE section_id = ?1",
        rusqlite::params![section_id, v.name, level],
      )
    }
    SectionValue::Interest(v) => conn.execute(
      "UPDATE interests SET name = ?2 WHERE section_id = ?1",
      rusqlite::params![section_id, v.name],
    ),
    SectionValue::Reference(v) => conn.execute(
      "UPDATE referees SET
         name = ?2, contact_info = ?3, relationship = ?4
       WHERE section_id = ?1",
      rusqlite::params![section_id, v.name, v.contact_info, v.relationship],
    ),
    SectionValue::SocialLink(v) => conn.execute(
      "UPDATE social_links SET platform = ?2, url = ?3 WHERE section_id = ?1",
      rusqlite::params![section_id, v.platform, v.url],
    ),
    SectionValue::Resume(v) => {
      let uploaded = encode_dt(v.uploaded_at);
      conn.execute(
        "UPDATE resumes SET file = ?2, uploaded_at = ?3 WHERE section_id = ?1",
        rusqlite::params![section_id, v.file, uploaded],
      )
    }
    SectionValue::PortfolioItem(v) => conn.execute(
      "UPDATE portfolio_items SET
         title = ?2, description = ?3, link = ?4, image = ?5
       WHERE section_id = ?1",
      rusqlite::params![section_id, v.title, v.description, v.link, v.image],
    ),
    SectionValue::Volunteer(v) => {
      let start = encode_date(v.start_date);
      let end = v.end_date.map(encode_date);
      conn.execute(
        "UPDATE volunteer_experiences SET
           organization = ?2, role = ?3, start_date = ?4, end_date = ?5,
           description = ?6
         WHERE section_id = ?1",
        rusqlite::params![
          section_id,
          v.organization,
          v.role,
          start,
          end,
          v.description,
        ],
      )
    }
  }
}

/// Delete a row from its kind's table. Returns the number of rows changed.
pub fn delete(
  conn: &rusqlite::Connection,
  kind: SectionKind,
  section_id: &str,
) -> rusqlite::Result<usize> {
  conn.execute(
    &format!("DELETE FROM {} WHERE section_id = ?1", table(kind)),
    rusqlite::params![section_id],
  )
}

/// Look up the profile that owns a row, if the row exists.
pub fn owner(
  conn: &rusqlite::Connection,
  kind: SectionKind,
  section_id: &str,
) -> rusqlite::Result<Option<String>> {
  conn
    .query_row(
      &format!("SELECT profile_id FROM {} WHERE section_id = ?1", table(kind)),
      rusqlite::params![section_id],
      |row| row.get(0),
    )
    .optional()
}

// ─── Row mappers ─────────────────────────────────────────────────────────────

fn experience_row(
  row: &rusqlite::Row,
) -> rusqlite::Result<Row<ExperienceValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      ExperienceValue {
      title:        row.get(2)?,
      company:      row.get(3)?,
      company_link: row.get(4)?,
      start_date:   date_col(row, 5)?,
      end_date:     opt_date_col(row, 6)?,
      is_current:   row.get(7)?,
      description:  row.get(8)?,
    },
  })
}

fn education_row(row: &rusqlite::Row) -> rusqlite::Result<Row<EducationValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      EducationValue {
      institution:      row.get(2)?,
      degree:           row.get(3)?,
      field_of_study:   row.get(4)?,
      start_year:       row.get(5)?,
      end_year:         row.get(6)?,
      is_current:       row.get(7)?,
      description:      row.get(8)?,
      focus:            row.get(9)?,
      institution_link: row.get(10)?,
    },
  })
}

fn skill_row(row: &rusqlite::Row) -> rusqlite::Result<Row<SkillValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      SkillValue {
      kind:                    skill_kind_col(row, 2)?,
      name:                    row.get(3)?,
      self_assessment_percent: row.get(4)?,
      months_of_experience:    row.get(5)?,
    },
  })
}

fn project_row(row: &rusqlite::Row) -> rusqlite::Result<Row<ProjectValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      ProjectValue {
      name:        row.get(2)?,
      description: row.get(3)?,
      is_public:   row.get(4)?,
      is_alone:    row.get(5)?,
      is_finished: row.get(6)?,
      link:        row.get(7)?,
    },
  })
}

fn certification_row(
  row: &rusqlite::Row,
) -> rusqlite::Result<Row<CertificationValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      CertificationValue {
      name:                 row.get(2)?,
      issuing_organization: row.get(3)?,
      issue_date:           date_col(row, 4)?,
      expiration_date:      opt_date_col(row, 5)?,
      do_expire:            row.get(6)?,
      credential_id:        row.get(7)?,
      credential_url:       row.get(8)?,
    },
  })
}

fn award_row(row: &rusqlite::Row) -> rusqlite::Result<Row<AwardValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      AwardValue {
      title:         row.get(2)?,
      issuer:        row.get(3)?,
      date_received: date_col(row, 4)?,
      description:   row.get(5)?,
      award_url:     row.get(6)?,
    },
  })
}

fn language_row(row: &rusqlite::Row) -> rusqlite::Result<Row<LanguageValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      LanguageValue {
      name:  row.get(2)?,
      level: language_level_col(row, 3)?,
    },
  })
}

fn interest_row(row: &rusqlite::Row) -> rusqlite::Result<Row<InterestValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      InterestValue { name: row.get(2)? },
  })
}

fn reference_row(row: &rusqlite::Row) -> rusqlite::Result<Row<ReferenceValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      ReferenceValue {
      name:         row.get(2)?,
      contact_info: row.get(3)?,
      relationship: row.get(4)?,
    },
  })
}

fn social_link_row(
  row: &rusqlite::Row,
) -> rusqlite::Result<Row<SocialLinkValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      SocialLinkValue {
      platform: row.get(2)?,
      url:      row.get(3)?,
    },
  })
}

fn resume_row(row: &rusqlite::Row) -> rusqlite::Result<Row<ResumeValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      ResumeValue {
      file:        row.get(2)?,
      uploaded_at: dt_col(row, 3)?,
    },
  })
}

fn portfolio_item_row(
  row: &rusqlite::Row,
) -> rusqlite::Result<Row<PortfolioItemValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      PortfolioItemValue {
      title:       row.get(2)?,
      description: row.get(3)?,
      link:        row.get(4)?,
      image:       row.get(5)?,
    },
  })
}

fn volunteer_row(row: &rusqlite::Row) -> rusqlite::Result<Row<VolunteerValue>> {
  Ok(Row {
    section_id: uuid_col(row, 0)?,
    profile_id: uuid_col(row, 1)?,
    value:      VolunteerValue {
      organization: row.get(2)?,
      role:         row.get(3)?,
      start_date:   date_col(row, 4)?,
      end_date:     opt_date_col(row, 5)?,
      description:  row.get(6)?,
    },
  })
}

// ─── Typed listings ──────────────────────────────────────────────────────────

pub fn list_experiences(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<ExperienceValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, title, company, company_link,
            start_date, end_date, is_current, description
     FROM experiences WHERE profile_id = ?1
     ORDER BY is_current DESC, start_date DESC, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], experience_row)?;
  rows.collect()
}

pub fn list_educations(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<EducationValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, institution, degree, field_of_study,
            start_year, end_year, is_current, description, focus,
            institution_link
     FROM educations WHERE profile_id = ?1
     ORDER BY is_current DESC, start_year DESC, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], education_row)?;
  rows.collect()
}

pub fn list_skills(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<SkillValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, kind, name, self_assessment_percent,
            months_of_experience
     FROM skills WHERE profile_id = ?1
     ORDER BY self_assessment_percent DESC NULLS LAST, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], skill_row)?;
  rows.collect()
}

pub fn list_projects(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<ProjectValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, name, description, is_public, is_alone,
            is_finished, link
     FROM projects WHERE profile_id = ?1
     ORDER BY is_finished DESC, name, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], project_row)?;
  rows.collect()
}

pub fn list_certifications(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<CertificationValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, name, issuing_organization, issue_date,
            expiration_date, do_expire, credential_id, credential_url
     FROM certifications WHERE profile_id = ?1
     ORDER BY issue_date DESC, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], certification_row)?;
  rows.collect()
}

pub fn list_awards(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<AwardValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, title, issuer, date_received,
            description, award_url
     FROM awards WHERE profile_id = ?1
     ORDER BY date_received DESC, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], award_row)?;
  rows.collect()
}

pub fn list_languages(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<LanguageValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, name, level
     FROM languages WHERE profile_id = ?1
     ORDER BY rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], language_row)?;
  rows.collect()
}

pub fn list_interests(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<InterestValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, name
     FROM interests WHERE profile_id = ?1
     ORDER BY rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], interest_row)?;
  rows.collect()
}

pub fn list_references(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<ReferenceValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, name, contact_info, relationship
     FROM referees WHERE profile_id = ?1
     ORDER BY rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], reference_row)?;
  rows.collect()
}

pub fn list_social_links(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<SocialLinkValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, platform, url
     FROM social_links WHERE profile_id = ?1
     ORDER BY rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], social_link_row)?;
  rows.collect()
}

pub fn list_resumes(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<ResumeValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, file, uploaded_at
     FROM resumes WHERE profile_id = ?1
     ORDER BY uploaded_at DESC, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], resume_row)?;
  rows.collect()
}

pub fn list_portfolio_items(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<PortfolioItemValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, title, description, link, image
     FROM portfolio_items WHERE profile_id = ?1
     ORDER BY rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], portfolio_item_row)?;
  rows.collect()
}

pub fn list_volunteer_experiences(
  conn: &rusqlite::Connection,
  profile_id: &str,
) -> rusqlite::Result<Vec<Row<VolunteerValue>>> {
  let mut stmt = conn.prepare(
    "SELECT section_id, profile_id, organization, role, start_date,
            end_date, description
     FROM volunteer_experiences WHERE profile_id = ?1
     ORDER BY start_date DESC, rowid",
  )?;
  let rows = stmt.query_map(rusqlite::params![profile_id], volunteer_row)?;
  rows.collect()
}

/// The skills attached to a host row, by name.
pub fn list_linked_skills(
  conn: &rusqlite::Connection,
  host: SkillHost,
  host_id: &str,
) -> rusqlite::Result<Vec<Row<SkillValue>>> {
  let (link, col) = link_table(host);
  let mut stmt = conn.prepare(&format!(
    "SELECT s.section_id, s.profile_id, s.kind, s.name,
            s.self_assessment_percent, s.months_of_experience
     FROM skills s
     JOIN {link} l ON l.skill_id = s.section_id
     WHERE l.{col} = ?1
     ORDER BY s.name, s.rowid"
  ))?;
  let rows = stmt.query_map(rusqlite::params![host_id], skill_row)?;
  rows.collect()
}

// ─── Tagged listing ──────────────────────────────────────────────────────────

fn wrap<T>(rows: Vec<Row<T>>, tag: impl Fn(T) -> SectionValue) -> Vec<Section> {
  rows.into_iter().map(|r| r.map(&tag)).collect()
}

/// List one collection with payloads re-tagged by kind.
pub fn list(
  conn: &rusqlite::Connection,
  profile_id: &str,
  kind: SectionKind,
) -> rusqlite::Result<Vec<Section>> {
  Ok(match kind {
    SectionKind::Experience => {
      wrap(list_experiences(conn, profile_id)?, SectionValue::Experience)
    }
    SectionKind::Education => {
      wrap(list_educations(conn, profile_id)?, SectionValue::Education)
    }
    SectionKind::Skill => {
      wrap(list_skills(conn, profile_id)?, SectionValue::Skill)
    }
    SectionKind::Project => {
      wrap(list_projects(conn, profile_id)?, SectionValue::Project)
    }
    SectionKind::Certification => wrap(
      list_certifications(conn, profile_id)?,
      SectionValue::Certification,
    ),
    SectionKind::Award => {
      wrap(list_awards(conn, profile_id)?, SectionValue::Award)
    }
    SectionKind::Language => {
      wrap(list_languages(conn, profile_id)?, SectionValue::Language)
    }
    SectionKind::Interest => {
      wrap(list_interests(conn, profile_id)?, SectionValue::Interest)
    }
    SectionKind::Reference => {
      wrap(list_references(conn, profile_id)?, SectionValue::Reference)
    }
    SectionKind::SocialLink => {
      wrap(list_social_links(conn, profile_id)?, SectionValue::SocialLink)
    }
    SectionKind::Resume => {
      wrap(list_resumes(conn, profile_id)?, SectionValue::Resume)
    }
    SectionKind::PortfolioItem => wrap(
      list_portfolio_items(conn, profile_id)?,
      SectionValue::PortfolioItem,
    ),
    SectionKind::Volunteer => wrap(
      list_volunteer_experiences(conn, profile_id)?,
      SectionValue::Volunteer,
    ),
  })
}

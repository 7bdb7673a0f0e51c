//! Section types — the child collections of a profile.
//!
//! Each variant of [`SectionValue`] is one row kind in the profile graph: a
//! position held, a degree earned, a skill, and so on. Rows are written
//! through the tagged union and read back as typed [`Row`]s; storage
//! backends keep one table per kind, so ordering columns and foreign keys
//! stay fully relational.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Choice fields ───────────────────────────────────────────────────────────

/// Broad classification of a skill.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
  Technical,
  Soft,
  Language,
  #[default]
  Other,
}

/// Self-reported proficiency in a spoken language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageLevel {
  Beginner,
  Basic,
  Medium,
  Intermediate,
  Advanced,
  Native,
}

// ─── Career history ──────────────────────────────────────────────────────────

/// A position held at a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceValue {
  pub title:        String,
  pub company:      String,
  pub company_link: Option<String>,
  pub start_date:   NaiveDate,
  pub end_date:     Option<NaiveDate>,
  /// Still in this position. May coexist with a populated `end_date`;
  /// display ordering trusts the flag over the date.
  pub is_current:   bool,
  pub description:  Option<String>,
}

/// A degree or course of study at an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationValue {
  pub institution:      String,
  pub degree:           String,
  pub field_of_study:   String,
  pub start_year:       i32,
  pub end_year:         Option<i32>,
  pub is_current:       bool,
  pub description:      Option<String>,
  /// Specialisation within the field, e.g. "distributed systems".
  pub focus:            Option<String>,
  pub institution_link: Option<String>,
}

/// Unpaid work for an organisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerValue {
  pub organization: String,
  pub role:         String,
  pub start_date:   NaiveDate,
  pub end_date:     Option<NaiveDate>,
  pub description:  Option<String>,
}

// ─── Skills ──────────────────────────────────────────────────────────────────

/// A skill. May be attached to experiences, educations and projects via
/// [`SkillHost`] links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillValue {
  pub kind:                    SkillKind,
  pub name:                    String,
  /// Self-assessed proficiency within 0..=100; validated on every write.
  pub self_assessment_percent: Option<i32>,
  pub months_of_experience:    Option<f64>,
}

// ─── Showcase ────────────────────────────────────────────────────────────────

/// A personal or professional project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectValue {
  pub name:        String,
  pub description: String,
  /// Hidden from the aggregated view when `false`.
  pub is_public:   bool,
  /// Built solo rather than in a team.
  pub is_alone:    bool,
  pub is_finished: bool,
  pub link:        Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationValue {
  pub name:                 String,
  pub issuing_organization: String,
  pub issue_date:           NaiveDate,
  pub expiration_date:      Option<NaiveDate>,
  pub do_expire:            bool,
  pub credential_id:        Option<String>,
  pub credential_url:       Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardValue {
  pub title:         String,
  pub issuer:        String,
  pub date_received: NaiveDate,
  pub description:   Option<String>,
  pub award_url:     Option<String>,
}

/// An item in the visual portfolio. Kept out of the default aggregated
/// view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItemValue {
  pub title:       String,
  pub description: String,
  pub link:        Option<String>,
  /// Path reference to a showcase image in the media store.
  pub image:       Option<String>,
}

// ─── Personal ────────────────────────────────────────────────────────────────

/// A spoken language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageValue {
  pub name:  String,
  pub level: LanguageLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestValue {
  pub name: String,
}

/// A person willing to vouch for the profile owner. Kept out of the
/// default aggregated view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceValue {
  pub name:         String,
  pub contact_info: String,
  pub relationship: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinkValue {
  pub platform: String,
  pub url:      String,
}

/// An uploaded resume document. The file itself lives in the media store;
/// only the path reference is kept here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeValue {
  pub file:        String,
  /// Overwritten by the store whenever the row is written.
  pub uploaded_at: DateTime<Utc>,
}

// ─── SectionKind ─────────────────────────────────────────────────────────────

/// Discriminant naming one child collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
  Experience,
  Education,
  Skill,
  Project,
  Certification,
  Award,
  Language,
  Interest,
  Reference,
  SocialLink,
  Resume,
  PortfolioItem,
  Volunteer,
}

impl SectionKind {
  /// Every kind, in the order the profile page presents them.
  pub const ALL: [SectionKind; 13] = [
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skill,
    SectionKind::Project,
    SectionKind::Certification,
    SectionKind::Award,
    SectionKind::Language,
    SectionKind::Interest,
    SectionKind::Reference,
    SectionKind::SocialLink,
    SectionKind::Resume,
    SectionKind::PortfolioItem,
    SectionKind::Volunteer,
  ];

  /// The kind's name as used in JSON tags and URL paths. Spellings agree
  /// with the `rename_all = "snake_case"` serde tags above.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Experience => "experience",
      Self::Education => "education",
      Self::Skill => "skill",
      Self::Project => "project",
      Self::Certification => "certification",
      Self::Award => "award",
      Self::Language => "language",
      Self::Interest => "interest",
      Self::Reference => "reference",
      Self::SocialLink => "social_link",
      Self::Resume => "resume",
      Self::PortfolioItem => "portfolio_item",
      Self::Volunteer => "volunteer",
    }
  }
}

// ─── SectionValue ────────────────────────────────────────────────────────────

/// The typed payload of a section. The variant names the collection the
/// row belongs to, mirroring the per-kind tables in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum SectionValue {
  Experience(ExperienceValue),
  Education(EducationValue),
  Skill(SkillValue),
  Project(ProjectValue),
  Certification(CertificationValue),
  Award(AwardValue),
  Language(LanguageValue),
  Interest(InterestValue),
  Reference(ReferenceValue),
  SocialLink(SocialLinkValue),
  Resume(ResumeValue),
  PortfolioItem(PortfolioItemValue),
  Volunteer(VolunteerValue),
}

impl SectionValue {
  /// The collection this value belongs to.
  pub fn kind(&self) -> SectionKind {
    match self {
      Self::Experience(_) => SectionKind::Experience,
      Self::Education(_) => SectionKind::Education,
      Self::Skill(_) => SectionKind::Skill,
      Self::Project(_) => SectionKind::Project,
      Self::Certification(_) => SectionKind::Certification,
      Self::Award(_) => SectionKind::Award,
      Self::Language(_) => SectionKind::Language,
      Self::Interest(_) => SectionKind::Interest,
      Self::Reference(_) => SectionKind::Reference,
      Self::SocialLink(_) => SectionKind::SocialLink,
      Self::Resume(_) => SectionKind::Resume,
      Self::PortfolioItem(_) => SectionKind::PortfolioItem,
      Self::Volunteer(_) => SectionKind::Volunteer,
    }
  }

  /// Check the value's closed-range constraints.
  ///
  /// The only hard range today is the skill self-assessment percent,
  /// which must fall within 0..=100 when present.
  pub fn validate(&self) -> Result<()> {
    if let Self::Skill(skill) = self
      && let Some(pct) = skill.self_assessment_percent
      && !(0..=100).contains(&pct)
    {
      return Err(Error::PercentOutOfRange(pct));
    }
    Ok(())
  }
}

// ─── Stored rows ─────────────────────────────────────────────────────────────

/// A persisted section row: server-assigned id, owning profile, payload.
///
/// `value` is flattened during serialisation, so a typed row serialises to
/// one flat JSON object while a [`Section`] keeps its `type`/`data`
/// tagging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row<T> {
  pub section_id: Uuid,
  pub profile_id: Uuid,
  #[serde(flatten)]
  pub value:      T,
}

impl<T> Row<T> {
  /// Re-wrap the payload, keeping the identity columns.
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Row<U> {
    Row {
      section_id: self.section_id,
      profile_id: self.profile_id,
      value:      f(self.value),
    }
  }
}

/// A stored section with its payload still tagged by kind — what the
/// write path accepts and returns.
pub type Section = Row<SectionValue>;

// ─── Skill linkage ───────────────────────────────────────────────────────────

/// The owning side of a skill link: the row a skill is attached to.
///
/// The association carries no attributes of its own, and linking is
/// idempotent in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SkillHost {
  Experience(Uuid),
  Education(Uuid),
  Project(Uuid),
}

impl SkillHost {
  pub fn id(self) -> Uuid {
    match self {
      Self::Experience(id) | Self::Education(id) | Self::Project(id) => id,
    }
  }

  pub fn kind(self) -> SectionKind {
    match self {
      Self::Experience(_) => SectionKind::Experience,
      Self::Education(_) => SectionKind::Education,
      Self::Project(_) => SectionKind::Project,
    }
  }
}

//! The aggregated, display-ready form of a profile.

use serde::{Deserialize, Serialize};

use crate::{
  profile::Profile,
  section::{
    AwardValue, CertificationValue, EducationValue, ExperienceValue,
    InterestValue, LanguageValue, ProjectValue, Row, SkillValue,
    SocialLinkValue, VolunteerValue,
  },
};

/// One account's complete profile page, assembled in a single pass.
///
/// Collections arrive pre-ordered for display, and projects are already
/// filtered to the public ones. References, resumes and portfolio items
/// are deliberately absent: they are fetched through their own
/// collections when a page needs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileView {
  pub profile:               Profile,
  /// Current positions first, then most recent start date.
  pub experiences:           Vec<Row<ExperienceValue>>,
  /// In-progress degrees first, then most recent start year.
  pub educations:            Vec<Row<EducationValue>>,
  /// Highest self-assessment first; unrated skills trail the rated ones.
  pub skills:                Vec<Row<SkillValue>>,
  /// Public projects only. Finished work leads, alphabetical within.
  pub projects:              Vec<Row<ProjectValue>>,
  /// Most recently issued first.
  pub certifications:        Vec<Row<CertificationValue>>,
  /// Most recently received first.
  pub awards:                Vec<Row<AwardValue>>,
  pub languages:             Vec<Row<LanguageValue>>,
  pub interests:             Vec<Row<InterestValue>>,
  pub social_links:          Vec<Row<SocialLinkValue>>,
  /// Most recent engagement first.
  pub volunteer_experiences: Vec<Row<VolunteerValue>>,
}

impl ProfileView {
  /// Total number of section rows in the view.
  pub fn section_count(&self) -> usize {
    self.experiences.len()
      + self.educations.len()
      + self.skills.len()
      + self.projects.len()
      + self.certifications.len()
      + self.awards.len()
      + self.languages.len()
      + self.interests.len()
      + self.social_links.len()
      + self.volunteer_experiences.len()
  }
}

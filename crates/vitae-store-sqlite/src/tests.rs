//! Store-level tests; each one runs against a fresh in-memory database.

use chrono::{DateTime, NaiveDate};
use uuid::Uuid;
use vitae_core::{
  profile::{DEFAULT_PICTURE, NewProfile, ProfileChanges},
  section::{
    AwardValue, CertificationValue, EducationValue, ExperienceValue,
    InterestValue, LanguageLevel, LanguageValue, PortfolioItemValue,
    ProjectValue, ReferenceValue, ResumeValue, SectionKind, SectionValue,
    SkillHost, SkillKind, SkillValue, SocialLinkValue, VolunteerValue,
  },
  store::ProfileStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_profile(account_id: Uuid, email: &str) -> NewProfile {
  NewProfile {
    account_id,
    email: email.into(),
    bio: None,
    picture: None,
  }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn experience(title: &str, start: NaiveDate, is_current: bool) -> SectionValue {
  SectionValue::Experience(ExperienceValue {
    title:        title.into(),
    company:      "Initech".into(),
    company_link: None,
    start_date:   start,
    end_date:     None,
    is_current,
    description:  None,
  })
}

fn education(
  institution: &str,
  start_year: i32,
  is_current: bool,
) -> SectionValue {
  SectionValue::Education(EducationValue {
    institution:      institution.into(),
    degree:           "BSc".into(),
    field_of_study:   "Computer Science".into(),
    start_year,
    end_year:         None,
    is_current,
    description:      None,
    focus:            None,
    institution_link: None,
  })
}

fn skill(name: &str, pct: Option<i32>) -> SectionValue {
  SectionValue::Skill(SkillValue {
    kind:                    SkillKind::Technical,
    name:                    name.into(),
    self_assessment_percent: pct,
    months_of_experience:    None,
  })
}

fn project(name: &str, is_public: bool, is_finished: bool) -> SectionValue {
  SectionValue::Project(ProjectValue {
    name:        name.into(),
    description: "a project".into(),
    is_public,
    is_alone:    false,
    is_finished,
    link:        None,
  })
}

/// One representative value of every section kind.
fn sample(kind: SectionKind) -> SectionValue {
  match kind {
    SectionKind::Experience => experience("Engineer", date(2020, 1, 1), false),
    SectionKind::Education => education("MIT", 2014, false),
    SectionKind::Skill => skill("Rust", Some(80)),
    SectionKind::Project => project("alpha", true, true),
    SectionKind::Certification => {
      SectionValue::Certification(CertificationValue {
        name:                 "Cloud Architect".into(),
        issuing_organization: "Examplecorp".into(),
        issue_date:           date(2021, 5, 1),
        expiration_date:      None,
        do_expire:            false,
        credential_id:        None,
        credential_url:       None,
      })
    }
    SectionKind::Award => SectionValue::Award(AwardValue {
      title:         "Employee of the month".into(),
      issuer:        "Initech".into(),
      date_received: date(2019, 3, 1),
      description:   None,
      award_url:     None,
    }),
    SectionKind::Language => SectionValue::Language(LanguageValue {
      name:  "Spanish".into(),
      level: LanguageLevel::Medium,
    }),
    SectionKind::Interest => {
      SectionValue::Interest(InterestValue { name: "Chess".into() })
    }
    SectionKind::Reference => SectionValue::Reference(ReferenceValue {
      name:         "Dana".into(),
      contact_info: "dana@example.com".into(),
      relationship: "Colleague".into(),
    }),
    SectionKind::SocialLink => SectionValue::SocialLink(SocialLinkValue {
      platform: "github".into(),
      url:      "https://github.com/example".into(),
    }),
    SectionKind::Resume => SectionValue::Resume(ResumeValue {
      file:        "resumes/cv.pdf".into(),
      uploaded_at: DateTime::UNIX_EPOCH,
    }),
    SectionKind::PortfolioItem => {
      SectionValue::PortfolioItem(PortfolioItemValue {
        title:       "Screenshot".into(),
        description: "A thing I made".into(),
        link:        None,
        image:       None,
      })
    }
    SectionKind::Volunteer => SectionValue::Volunteer(VolunteerValue {
      organization: "Food bank".into(),
      role:         "Driver".into(),
      start_date:   date(2018, 6, 1),
      end_date:     None,
      description:  None,
    }),
  }
}

// ─── Profiles ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_fetch_profile() {
  let s = store().await;
  let account = Uuid::new_v4();

  let p = s
    .create_profile(new_profile(account, "alice@example.com"))
    .await
    .unwrap();
  assert_eq!(p.account_id, account);
  assert_eq!(p.email, "alice@example.com");
  assert_eq!(p.picture, DEFAULT_PICTURE);
  assert_eq!(p.created_at, p.updated_at);

  let by_id = s.profile(p.profile_id).await.unwrap().unwrap();
  assert_eq!(by_id.profile_id, p.profile_id);
  assert_eq!(by_id.email, "alice@example.com");

  let by_account = s.profile_by_account(account).await.unwrap().unwrap();
  assert_eq!(by_account.profile_id, p.profile_id);
}

#[tokio::test]
async fn fetch_missing_profile_returns_none() {
  let s = store().await;
  assert!(s.profile(Uuid::new_v4()).await.unwrap().is_none());
  assert!(s.profile_by_account(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn create_profile_duplicate_account_errors() {
  let s = store().await;
  let account = Uuid::new_v4();

  s.create_profile(new_profile(account, "first@example.com"))
    .await
    .unwrap();
  let err = s
    .create_profile(new_profile(account, "second@example.com"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::DuplicateAccount(a)) if a == account
  ));
}

#[tokio::test]
async fn create_profile_duplicate_email_errors() {
  let s = store().await;

  s.create_profile(new_profile(Uuid::new_v4(), "taken@example.com"))
    .await
    .unwrap();
  let err = s
    .create_profile(new_profile(Uuid::new_v4(), "taken@example.com"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::DuplicateEmail(_))
  ));
}

#[tokio::test]
async fn update_profile_replaces_fields() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "old@example.com"))
    .await
    .unwrap();

  let updated = s
    .update_profile(p.profile_id, ProfileChanges {
      email:   "new@example.com".into(),
      bio:     Some("hello".into()),
      picture: Some("profile_pics/me.png".into()),
    })
    .await
    .unwrap();

  assert_eq!(updated.email, "new@example.com");
  assert_eq!(updated.bio.as_deref(), Some("hello"));
  assert_eq!(updated.picture, "profile_pics/me.png");
  assert_eq!(updated.created_at, p.created_at);
  assert!(updated.updated_at > p.updated_at);

  let fetched = s.profile(p.profile_id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "new@example.com");
  assert_eq!(fetched.bio.as_deref(), Some("hello"));
}

#[tokio::test]
async fn update_profile_none_picture_resets_to_default() {
  let s = store().await;
  let mut input = new_profile(Uuid::new_v4(), "pic@example.com");
  input.picture = Some("profile_pics/custom.png".into());
  let p = s.create_profile(input).await.unwrap();
  assert_eq!(p.picture, "profile_pics/custom.png");

  let updated = s
    .update_profile(p.profile_id, ProfileChanges {
      email:   "pic@example.com".into(),
      bio:     None,
      picture: None,
    })
    .await
    .unwrap();
  assert_eq!(updated.picture, DEFAULT_PICTURE);
}

#[tokio::test]
async fn update_profile_missing_errors() {
  let s = store().await;
  let err = s
    .update_profile(Uuid::new_v4(), ProfileChanges {
      email:   "ghost@example.com".into(),
      bio:     None,
      picture: None,
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::ProfileNotFound(_))
  ));
}

#[tokio::test]
async fn update_profile_email_collision_errors() {
  let s = store().await;
  s.create_profile(new_profile(Uuid::new_v4(), "held@example.com"))
    .await
    .unwrap();
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "mine@example.com"))
    .await
    .unwrap();

  let err = s
    .update_profile(p.profile_id, ProfileChanges {
      email:   "held@example.com".into(),
      bio:     None,
      picture: None,
    })
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::DuplicateEmail(_))
  ));

  // keeping your own email is not a collision
  s.update_profile(p.profile_id, ProfileChanges {
    email:   "mine@example.com".into(),
    bio:     Some("still me".into()),
    picture: None,
  })
  .await
  .unwrap();
}

#[tokio::test]
async fn delete_profile_missing_errors() {
  let s = store().await;
  let err = s.delete_profile(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::ProfileNotFound(_))
  ));
}

#[tokio::test]
async fn delete_profile_cascades_to_sections_and_links() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "gone@example.com"))
    .await
    .unwrap();

  // one row of every kind, plus a skill link between two of them
  let mut rows = Vec::new();
  for kind in SectionKind::ALL {
    rows.push(s.add_section(p.profile_id, sample(kind)).await.unwrap());
  }
  let host = rows
    .iter()
    .find(|r| r.value.kind() == SectionKind::Experience)
    .map(|r| SkillHost::Experience(r.section_id))
    .unwrap();
  let skill_id = rows
    .iter()
    .find(|r| r.value.kind() == SectionKind::Skill)
    .map(|r| r.section_id)
    .unwrap();
  s.link_skill(host, skill_id).await.unwrap();

  // a second profile with its own rows and link
  let other_account = Uuid::new_v4();
  let other = s
    .create_profile(new_profile(other_account, "stays@example.com"))
    .await
    .unwrap();
  let other_exp = s
    .add_section(other.profile_id, experience("Kept", date(2019, 1, 1), true))
    .await
    .unwrap();
  let other_skill = s
    .add_section(other.profile_id, skill("Rust", Some(80)))
    .await
    .unwrap();
  let other_host = SkillHost::Experience(other_exp.section_id);
  s.link_skill(other_host, other_skill.section_id).await.unwrap();

  s.delete_profile(p.profile_id).await.unwrap();
  assert!(s.profile(p.profile_id).await.unwrap().is_none());

  // every child row went with the parent
  for row in &rows {
    let err = s
      .remove_section(row.value.kind(), row.section_id)
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      crate::Error::Core(vitae_core::Error::SectionNotFound(_))
    ));
  }
  let err = s.linked_skills(host).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SectionNotFound(_))
  ));

  // the second profile's rows and link are untouched
  let kept = s.linked_skills(other_host).await.unwrap();
  assert_eq!(kept.len(), 1);
  assert_eq!(kept[0].section_id, other_skill.section_id);
  let view = s.profile_view(other_account).await.unwrap();
  assert_eq!(view.experiences.len(), 1);
  assert_eq!(view.skills.len(), 1);

  // the account and email are free again
  let again = s
    .create_profile(new_profile(account, "gone@example.com"))
    .await
    .unwrap();
  let listed = s
    .sections(again.profile_id, SectionKind::Experience)
    .await
    .unwrap();
  assert!(listed.is_empty());
}

// ─── Sections ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_section_and_list() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "work@example.com"))
    .await
    .unwrap();

  let a = s
    .add_section(p.profile_id, experience("First", date(2018, 3, 1), false))
    .await
    .unwrap();
  let b = s
    .add_section(p.profile_id, experience("Second", date(2021, 6, 1), true))
    .await
    .unwrap();
  assert_ne!(a.section_id, b.section_id);
  assert_eq!(a.profile_id, p.profile_id);

  let rows = s
    .sections(p.profile_id, SectionKind::Experience)
    .await
    .unwrap();
  assert_eq!(rows.len(), 2);

  // other collections are untouched
  let skills = s.sections(p.profile_id, SectionKind::Skill).await.unwrap();
  assert!(skills.is_empty());
}

#[tokio::test]
async fn add_section_without_parent_errors() {
  let s = store().await;
  let err = s
    .add_section(Uuid::new_v4(), skill("Orphan", None))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::ProfileNotFound(_))
  ));
}

#[tokio::test]
async fn update_section_replaces_value() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "upd@example.com"))
    .await
    .unwrap();
  let row = s
    .add_section(p.profile_id, skill("Rust", Some(60)))
    .await
    .unwrap();

  let updated = s
    .update_section(row.section_id, skill("Rust", Some(85)))
    .await
    .unwrap();
  assert_eq!(updated.section_id, row.section_id);
  assert_eq!(updated.profile_id, p.profile_id);

  let rows = s.sections(p.profile_id, SectionKind::Skill).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert!(matches!(
    &rows[0].value,
    SectionValue::Skill(v) if v.self_assessment_percent == Some(85)
  ));
}

#[tokio::test]
async fn update_section_missing_errors() {
  let s = store().await;
  let err = s
    .update_section(Uuid::new_v4(), skill("Ghost", None))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SectionNotFound(_))
  ));
}

#[tokio::test]
async fn update_section_kind_mismatch_errors() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "mismatch@example.com"))
    .await
    .unwrap();
  let exp = s
    .add_section(p.profile_id, experience("Engineer", date(2020, 1, 1), true))
    .await
    .unwrap();

  // an experience id is not found in the skills collection
  let err = s
    .update_section(exp.section_id, skill("Rust", None))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SectionNotFound(_))
  ));
}

#[tokio::test]
async fn remove_section_deletes_row() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "rm@example.com"))
    .await
    .unwrap();
  let row = s
    .add_section(p.profile_id, skill("Temporary", None))
    .await
    .unwrap();

  s.remove_section(SectionKind::Skill, row.section_id)
    .await
    .unwrap();
  let rows = s.sections(p.profile_id, SectionKind::Skill).await.unwrap();
  assert!(rows.is_empty());

  let err = s
    .remove_section(SectionKind::Skill, row.section_id)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SectionNotFound(_))
  ));
}

#[tokio::test]
async fn sections_on_missing_profile_errors() {
  let s = store().await;
  let err = s
    .sections(Uuid::new_v4(), SectionKind::Award)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::ProfileNotFound(_))
  ));
}

#[tokio::test]
async fn skill_percent_out_of_range_errors() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "pct@example.com"))
    .await
    .unwrap();

  // boundaries are inclusive
  s.add_section(p.profile_id, skill("Floor", Some(0)))
    .await
    .unwrap();
  let ceiling = s
    .add_section(p.profile_id, skill("Ceiling", Some(100)))
    .await
    .unwrap();

  let err = s
    .add_section(p.profile_id, skill("Over", Some(101)))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::PercentOutOfRange(101))
  ));

  let err = s
    .add_section(p.profile_id, skill("Under", Some(-1)))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::PercentOutOfRange(-1))
  ));

  // the update path validates too
  let err = s
    .update_section(ceiling.section_id, skill("Ceiling", Some(150)))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::PercentOutOfRange(150))
  ));
}

#[tokio::test]
async fn resume_upload_timestamp_is_server_assigned() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "cv@example.com"))
    .await
    .unwrap();

  let added = s
    .add_section(
      p.profile_id,
      SectionValue::Resume(ResumeValue {
        file:        "resumes/cv.pdf".into(),
        uploaded_at: DateTime::UNIX_EPOCH,
      }),
    )
    .await
    .unwrap();

  let uploaded = match &added.value {
    SectionValue::Resume(v) => v.uploaded_at,
    other => panic!("expected resume, got {other:?}"),
  };
  assert!(uploaded > DateTime::UNIX_EPOCH);

  let rows = s.sections(p.profile_id, SectionKind::Resume).await.unwrap();
  assert!(matches!(
    &rows[0].value,
    SectionValue::Resume(v) if v.uploaded_at == uploaded
  ));
}

// ─── Skill links ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn link_and_list_skills() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "link@example.com"))
    .await
    .unwrap();

  let exp = s
    .add_section(p.profile_id, experience("Engineer", date(2019, 1, 1), true))
    .await
    .unwrap();
  let zig = s
    .add_section(p.profile_id, skill("Zig", Some(95)))
    .await
    .unwrap();
  let rust = s
    .add_section(p.profile_id, skill("Rust", Some(90)))
    .await
    .unwrap();
  let ansible = s
    .add_section(p.profile_id, skill("Ansible", Some(40)))
    .await
    .unwrap();

  let host = SkillHost::Experience(exp.section_id);
  s.link_skill(host, zig.section_id).await.unwrap();
  s.link_skill(host, rust.section_id).await.unwrap();
  s.link_skill(host, ansible.section_id).await.unwrap();

  // name order, not link order and not self-assessment order
  let linked = s.linked_skills(host).await.unwrap();
  let names: Vec<_> = linked.iter().map(|r| r.value.name.as_str()).collect();
  assert_eq!(names, ["Ansible", "Rust", "Zig"]);
}

#[tokio::test]
async fn link_skill_is_idempotent() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "idem@example.com"))
    .await
    .unwrap();
  let proj = s
    .add_section(p.profile_id, project("Tool", true, true))
    .await
    .unwrap();
  let sk = s
    .add_section(p.profile_id, skill("Rust", None))
    .await
    .unwrap();

  let host = SkillHost::Project(proj.section_id);
  s.link_skill(host, sk.section_id).await.unwrap();
  s.link_skill(host, sk.section_id).await.unwrap();

  let linked = s.linked_skills(host).await.unwrap();
  assert_eq!(linked.len(), 1);
}

#[tokio::test]
async fn link_skill_to_every_host_kind() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "hosts@example.com"))
    .await
    .unwrap();

  let exp = s
    .add_section(p.profile_id, experience("Job", date(2020, 1, 1), false))
    .await
    .unwrap();
  let edu = s
    .add_section(p.profile_id, education("Uni", 2016, false))
    .await
    .unwrap();
  let proj = s
    .add_section(p.profile_id, project("Thing", true, true))
    .await
    .unwrap();
  let sk = s
    .add_section(p.profile_id, skill("Rust", None))
    .await
    .unwrap();

  for host in [
    SkillHost::Experience(exp.section_id),
    SkillHost::Education(edu.section_id),
    SkillHost::Project(proj.section_id),
  ] {
    s.link_skill(host, sk.section_id).await.unwrap();
    let linked = s.linked_skills(host).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].section_id, sk.section_id);
  }
}

#[tokio::test]
async fn link_skill_missing_ends_error() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "ends@example.com"))
    .await
    .unwrap();
  let exp = s
    .add_section(p.profile_id, experience("Job", date(2020, 1, 1), false))
    .await
    .unwrap();
  let sk = s
    .add_section(p.profile_id, skill("Rust", None))
    .await
    .unwrap();

  let err = s
    .link_skill(SkillHost::Experience(Uuid::new_v4()), sk.section_id)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SectionNotFound(_))
  ));

  let err = s
    .link_skill(SkillHost::Experience(exp.section_id), Uuid::new_v4())
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SkillNotFound(_))
  ));
}

#[tokio::test]
async fn unlink_skill_removes_link_and_tolerates_absence() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "unlink@example.com"))
    .await
    .unwrap();
  let exp = s
    .add_section(p.profile_id, experience("Job", date(2020, 1, 1), false))
    .await
    .unwrap();
  let sk = s
    .add_section(p.profile_id, skill("Rust", None))
    .await
    .unwrap();

  let host = SkillHost::Experience(exp.section_id);
  s.link_skill(host, sk.section_id).await.unwrap();
  s.unlink_skill(host, sk.section_id).await.unwrap();
  assert!(s.linked_skills(host).await.unwrap().is_empty());

  // unlinking again, or unlinking something never linked, is a no-op
  s.unlink_skill(host, sk.section_id).await.unwrap();
  s.unlink_skill(host, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn removing_skill_drops_its_links() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "droplink@example.com"))
    .await
    .unwrap();
  let exp = s
    .add_section(p.profile_id, experience("Job", date(2020, 1, 1), false))
    .await
    .unwrap();
  let sk = s
    .add_section(p.profile_id, skill("Rust", None))
    .await
    .unwrap();

  let host = SkillHost::Experience(exp.section_id);
  s.link_skill(host, sk.section_id).await.unwrap();

  s.remove_section(SectionKind::Skill, sk.section_id)
    .await
    .unwrap();
  assert!(s.linked_skills(host).await.unwrap().is_empty());
}

#[tokio::test]
async fn removing_host_drops_the_link_but_keeps_the_skill() {
  let s = store().await;
  let p = s
    .create_profile(new_profile(Uuid::new_v4(), "drophost@example.com"))
    .await
    .unwrap();
  let exp = s
    .add_section(p.profile_id, experience("Job", date(2020, 1, 1), false))
    .await
    .unwrap();
  let proj = s
    .add_section(p.profile_id, project("Tool", true, true))
    .await
    .unwrap();
  let sk = s
    .add_section(p.profile_id, skill("Rust", None))
    .await
    .unwrap();

  let exp_host = SkillHost::Experience(exp.section_id);
  let proj_host = SkillHost::Project(proj.section_id);
  s.link_skill(exp_host, sk.section_id).await.unwrap();
  s.link_skill(proj_host, sk.section_id).await.unwrap();

  s.remove_section(SectionKind::Experience, exp.section_id)
    .await
    .unwrap();

  // the dead host cannot be listed, its link went with it
  let err = s.linked_skills(exp_host).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::SectionNotFound(_))
  ));

  // the skill itself and its other link survive
  let linked = s.linked_skills(proj_host).await.unwrap();
  assert_eq!(linked.len(), 1);
  assert_eq!(linked[0].section_id, sk.section_id);
  let skills = s.sections(p.profile_id, SectionKind::Skill).await.unwrap();
  assert_eq!(skills.len(), 1);
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn view_missing_account_errors() {
  let s = store().await;
  let account = Uuid::new_v4();
  let err = s.profile_view(account).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Core(vitae_core::Error::NoProfileForAccount(a)) if a == account
  ));
}

#[tokio::test]
async fn view_of_empty_profile_has_empty_collections() {
  let s = store().await;
  let account = Uuid::new_v4();
  s.create_profile(new_profile(account, "empty@example.com"))
    .await
    .unwrap();

  let view = s.profile_view(account).await.unwrap();
  assert_eq!(view.profile.email, "empty@example.com");
  assert_eq!(view.section_count(), 0);
}

#[tokio::test]
async fn view_orders_experiences_current_first_then_recent() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "order@example.com"))
    .await
    .unwrap();

  s.add_section(p.profile_id, experience("Oldest", date(2020, 1, 1), false))
    .await
    .unwrap();
  s.add_section(p.profile_id, experience("Recent", date(2022, 1, 1), false))
    .await
    .unwrap();
  s.add_section(p.profile_id, experience("Current", date(2021, 1, 1), true))
    .await
    .unwrap();

  let view = s.profile_view(account).await.unwrap();
  let titles: Vec<_> = view
    .experiences
    .iter()
    .map(|r| r.value.title.as_str())
    .collect();
  // the current flag outranks the start date
  assert_eq!(titles, ["Current", "Recent", "Oldest"]);
}

#[tokio::test]
async fn view_orders_educations_current_first_then_recent_year() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "edu@example.com"))
    .await
    .unwrap();

  s.add_section(p.profile_id, education("Old U", 2015, false))
    .await
    .unwrap();
  s.add_section(p.profile_id, education("Now U", 2021, true))
    .await
    .unwrap();
  s.add_section(p.profile_id, education("Mid U", 2019, false))
    .await
    .unwrap();

  let view = s.profile_view(account).await.unwrap();
  let names: Vec<_> = view
    .educations
    .iter()
    .map(|r| r.value.institution.as_str())
    .collect();
  assert_eq!(names, ["Now U", "Mid U", "Old U"]);
}

#[tokio::test]
async fn view_orders_skills_by_percent_nulls_last() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "skills@example.com"))
    .await
    .unwrap();

  s.add_section(p.profile_id, skill("Cooking", None))
    .await
    .unwrap();
  s.add_section(p.profile_id, skill("Rust", Some(90)))
    .await
    .unwrap();
  s.add_section(p.profile_id, skill("SQL", Some(50)))
    .await
    .unwrap();

  let view = s.profile_view(account).await.unwrap();
  let names: Vec<_> =
    view.skills.iter().map(|r| r.value.name.as_str()).collect();
  assert_eq!(names, ["Rust", "SQL", "Cooking"]);
}

#[tokio::test]
async fn view_filters_private_projects_and_orders_by_finish_then_name() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "proj@example.com"))
    .await
    .unwrap();

  s.add_section(p.profile_id, project("gamma", true, true))
    .await
    .unwrap();
  s.add_section(p.profile_id, project("alpha", true, false))
    .await
    .unwrap();
  s.add_section(p.profile_id, project("beta", true, true))
    .await
    .unwrap();
  s.add_section(p.profile_id, project("omega", false, true))
    .await
    .unwrap();

  let view = s.profile_view(account).await.unwrap();
  let names: Vec<_> =
    view.projects.iter().map(|r| r.value.name.as_str()).collect();
  assert_eq!(names, ["beta", "gamma", "alpha"]);

  // the private project still exists in its own collection
  let all = s
    .sections(p.profile_id, SectionKind::Project)
    .await
    .unwrap();
  assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn view_orders_dated_collections_most_recent_first() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "dated@example.com"))
    .await
    .unwrap();

  for (name, year) in [("Older Cert", 2020), ("Newer Cert", 2023)] {
    s.add_section(
      p.profile_id,
      SectionValue::Certification(CertificationValue {
        name:                 name.into(),
        issuing_organization: "Org".into(),
        issue_date:           date(year, 5, 1),
        expiration_date:      None,
        do_expire:            false,
        credential_id:        None,
        credential_url:       None,
      }),
    )
    .await
    .unwrap();
  }

  for (title, year) in [("Older Award", 2019), ("Newer Award", 2022)] {
    s.add_section(
      p.profile_id,
      SectionValue::Award(AwardValue {
        title:         title.into(),
        issuer:        "Committee".into(),
        date_received: date(year, 9, 1),
        description:   None,
        award_url:     None,
      }),
    )
    .await
    .unwrap();
  }

  for (org, year) in [("Shelter", 2018), ("Food Bank", 2021)] {
    s.add_section(
      p.profile_id,
      SectionValue::Volunteer(VolunteerValue {
        organization: org.into(),
        role:         "Helper".into(),
        start_date:   date(year, 2, 1),
        end_date:     None,
        description:  None,
      }),
    )
    .await
    .unwrap();
  }

  let view = s.profile_view(account).await.unwrap();
  assert_eq!(view.certifications[0].value.name, "Newer Cert");
  assert_eq!(view.awards[0].value.title, "Newer Award");
  assert_eq!(view.volunteer_experiences[0].value.organization, "Food Bank");
}

#[tokio::test]
async fn view_carries_unordered_sets_and_skips_attachments() {
  let s = store().await;
  let account = Uuid::new_v4();
  let p = s
    .create_profile(new_profile(account, "sets@example.com"))
    .await
    .unwrap();

  s.add_section(
    p.profile_id,
    SectionValue::Language(LanguageValue {
      name:  "Spanish".into(),
      level: LanguageLevel::Advanced,
    }),
  )
  .await
  .unwrap();
  s.add_section(
    p.profile_id,
    SectionValue::Interest(InterestValue { name: "Hiking".into() }),
  )
  .await
  .unwrap();
  s.add_section(
    p.profile_id,
    SectionValue::SocialLink(SocialLinkValue {
      platform: "github".into(),
      url:      "https://github.com/example".into(),
    }),
  )
  .await
  .unwrap();

  // reference, resume and portfolio rows never feed the aggregated page
  s.add_section(
    p.profile_id,
    SectionValue::Reference(ReferenceValue {
      name:         "Dana".into(),
      contact_info: "dana@example.com".into(),
      relationship: "Former manager".into(),
    }),
  )
  .await
  .unwrap();
  s.add_section(
    p.profile_id,
    SectionValue::Resume(ResumeValue {
      file:        "resumes/cv.pdf".into(),
      uploaded_at: DateTime::UNIX_EPOCH,
    }),
  )
  .await
  .unwrap();
  s.add_section(
    p.profile_id,
    SectionValue::PortfolioItem(PortfolioItemValue {
      title:       "Screenshot".into(),
      description: "A thing I made".into(),
      link:        None,
      image:       None,
    }),
  )
  .await
  .unwrap();

  let view = s.profile_view(account).await.unwrap();
  assert_eq!(view.languages.len(), 1);
  assert_eq!(view.interests.len(), 1);
  assert_eq!(view.social_links.len(), 1);
  assert_eq!(view.section_count(), 3);

  // they are still reachable through their own collections
  for kind in [
    SectionKind::Reference,
    SectionKind::Resume,
    SectionKind::PortfolioItem,
  ] {
    let rows = s.sections(p.profile_id, kind).await.unwrap();
    assert_eq!(rows.len(), 1);
  }
}

#[tokio::test]
async fn view_isolates_profiles_from_each_other() {
  let s = store().await;
  let account_a = Uuid::new_v4();
  let account_b = Uuid::new_v4();
  let a = s
    .create_profile(new_profile(account_a, "a@example.com"))
    .await
    .unwrap();
  let b = s
    .create_profile(new_profile(account_b, "b@example.com"))
    .await
    .unwrap();

  s.add_section(a.profile_id, experience("A1", date(2020, 1, 1), false))
    .await
    .unwrap();
  s.add_section(a.profile_id, experience("A2", date(2021, 1, 1), false))
    .await
    .unwrap();
  s.add_section(b.profile_id, experience("B1", date(2022, 1, 1), false))
    .await
    .unwrap();
  s.add_section(b.profile_id, skill("Rust", Some(40)))
    .await
    .unwrap();

  let view_a = s.profile_view(account_a).await.unwrap();
  assert_eq!(view_a.experiences.len(), 2);
  assert!(view_a.skills.is_empty());
  assert!(
    view_a
      .experiences
      .iter()
      .all(|r| r.profile_id == a.profile_id)
  );

  let view_b = s.profile_view(account_b).await.unwrap();
  assert_eq!(view_b.experiences.len(), 1);
  assert_eq!(view_b.skills.len(), 1);
}

//! SQL schema for the vitae SQLite store.
//!
//! Applied in full every time a connection opens; `PRAGMA user_version`
//! records the revision that future migrations will check against.
//!
//! Dates are ISO 8601 TEXT, so lexicographic order is chronological and the
//! display orderings below are plain `ORDER BY` clauses. Booleans are
//! INTEGER 0/1. Every child table cascades from `profiles`, and the skill
//! link tables cascade from both ends.

/// Full schema DDL; safe to re-run against an existing database.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS profiles (
    profile_id  TEXT PRIMARY KEY,
    account_id  TEXT NOT NULL UNIQUE,   -- one profile per account
    email       TEXT NOT NULL UNIQUE,
    bio         TEXT,
    picture     TEXT NOT NULL,
    created_at  TEXT NOT NULL,          -- ISO 8601 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

-- ── Career history ──────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS experiences (
    section_id   TEXT PRIMARY KEY,
    profile_id   TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    title        TEXT NOT NULL,
    company      TEXT NOT NULL,
    company_link TEXT,
    start_date   TEXT NOT NULL,         -- ISO 8601 date
    end_date     TEXT,
    is_current   INTEGER NOT NULL DEFAULT 0,
    description  TEXT
);

CREATE TABLE IF NOT EXISTS educations (
    section_id       TEXT PRIMARY KEY,
    profile_id       TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    institution      TEXT NOT NULL,
    degree           TEXT NOT NULL,
    field_of_study   TEXT NOT NULL,
    start_year       INTEGER NOT NULL,
    end_year         INTEGER,
    is_current       INTEGER NOT NULL DEFAULT 0,
    description      TEXT,
    focus            TEXT,
    institution_link TEXT
);

CREATE TABLE IF NOT EXISTS volunteer_experiences (
    section_id   TEXT PRIMARY KEY,
    profile_id   TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    organization TEXT NOT NULL,
    role         TEXT NOT NULL,
    start_date   TEXT NOT NULL,
    end_date     TEXT,
    description  TEXT
);

-- ── Skills ──────────────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS skills (
    section_id              TEXT PRIMARY KEY,
    profile_id              TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    kind                    TEXT NOT NULL DEFAULT 'other',
    name                    TEXT NOT NULL,
    self_assessment_percent INTEGER
        CHECK (self_assessment_percent BETWEEN 0 AND 100),
    months_of_experience    REAL
);

-- ── Showcase ────────────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS projects (
    section_id  TEXT PRIMARY KEY,
    profile_id  TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    name        TEXT NOT NULL,
    description TEXT NOT NULL,
    is_public   INTEGER NOT NULL DEFAULT 1,
    is_alone    INTEGER NOT NULL DEFAULT 0,
    is_finished INTEGER NOT NULL DEFAULT 1,
    link        TEXT
);

CREATE TABLE IF NOT EXISTS certifications (
    section_id           TEXT PRIMARY KEY,
    profile_id           TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    name                 TEXT NOT NULL,
    issuing_organization TEXT NOT NULL,
    issue_date           TEXT NOT NULL,
    expiration_date      TEXT,
    do_expire            INTEGER NOT NULL DEFAULT 0,
    credential_id        TEXT,
    credential_url       TEXT
);

CREATE TABLE IF NOT EXISTS awards (
    section_id    TEXT PRIMARY KEY,
    profile_id    TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    title         TEXT NOT NULL,
    issuer        TEXT NOT NULL,
    date_received TEXT NOT NULL,
    description   TEXT,
    award_url     TEXT
);

CREATE TABLE IF NOT EXISTS portfolio_items (
    section_id  TEXT PRIMARY KEY,
    profile_id  TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    link        TEXT,
    image       TEXT
);

-- ── Personal ────────────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS languages (
    section_id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    name       TEXT NOT NULL,
    level      TEXT NOT NULL             -- 'beginner' .. 'native'
);

CREATE TABLE IF NOT EXISTS interests (
    section_id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    name       TEXT NOT NULL
);

-- 'references' is reserved in SQL, hence the table name.
CREATE TABLE IF NOT EXISTS referees (
    section_id   TEXT PRIMARY KEY,
    profile_id   TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    name         TEXT NOT NULL,
    contact_info TEXT NOT NULL,
    relationship TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS social_links (
    section_id TEXT PRIMARY KEY,
    profile_id TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    platform   TEXT NOT NULL,
    url        TEXT NOT NULL
);

-- ── Attachments ─────────────────────────────────────────────────

CREATE TABLE IF NOT EXISTS resumes (
    section_id  TEXT PRIMARY KEY,
    profile_id  TEXT NOT NULL REFERENCES profiles(profile_id) ON DELETE CASCADE,
    file        TEXT NOT NULL,           -- path reference into the media store
    uploaded_at TEXT NOT NULL            -- ISO 8601 UTC; server-assigned
);

-- ── Skill links ─────────────────────────────────────────────────

-- Bare many-to-many associations; no attributes on the link itself.
CREATE TABLE IF NOT EXISTS experience_skills (
    experience_id TEXT NOT NULL REFERENCES experiences(section_id) ON DELETE CASCADE,
    skill_id      TEXT NOT NULL REFERENCES skills(section_id) ON DELETE CASCADE,
    PRIMARY KEY (experience_id, skill_id)
);

CREATE TABLE IF NOT EXISTS education_skills (
    education_id TEXT NOT NULL REFERENCES educations(section_id) ON DELETE CASCADE,
    skill_id     TEXT NOT NULL REFERENCES skills(section_id) ON DELETE CASCADE,
    PRIMARY KEY (education_id, skill_id)
);

CREATE TABLE IF NOT EXISTS project_skills (
    project_id TEXT NOT NULL REFERENCES projects(section_id) ON DELETE CASCADE,
    skill_id   TEXT NOT NULL REFERENCES skills(section_id) ON DELETE CASCADE,
    PRIMARY KEY (project_id, skill_id)
);

CREATE INDEX IF NOT EXISTS experiences_profile_idx
    ON experiences(profile_id);
CREATE INDEX IF NOT EXISTS educations_profile_idx
    ON educations(profile_id);
CREATE INDEX IF NOT EXISTS volunteer_experiences_profile_idx
    ON volunteer_experiences(profile_id);
CREATE INDEX IF NOT EXISTS skills_profile_idx
    ON skills(profile_id);
CREATE INDEX IF NOT EXISTS projects_profile_idx
    ON projects(profile_id);
CREATE INDEX IF NOT EXISTS certifications_profile_idx
    ON certifications(profile_id);
CREATE INDEX IF NOT EXISTS awards_profile_idx
    ON awards(profile_id);
CREATE INDEX IF NOT EXISTS portfolio_items_profile_idx
    ON portfolio_items(profile_id);
CREATE INDEX IF NOT EXISTS languages_profile_idx
    ON languages(profile_id);
CREATE INDEX IF NOT EXISTS interests_profile_idx
    ON interests(profile_id);
CREATE INDEX IF NOT EXISTS referees_profile_idx
    ON referees(profile_id);
CREATE INDEX IF NOT EXISTS social_links_profile_idx
    ON social_links(profile_id);
CREATE INDEX IF NOT EXISTS resumes_profile_idx
    ON resumes(profile_id);
CREATE INDEX IF NOT EXISTS experience_skills_skill_idx
    ON experience_skills(skill_id);
CREATE INDEX IF NOT EXISTS education_skills_skill_idx
    ON education_skills(skill_id);
CREATE INDEX IF NOT EXISTS project_skills_skill_idx
    ON project_skills(skill_id);

PRAGMA user_version = 1;
";

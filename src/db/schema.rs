//! SQL DDL for initializing the database schema.
//!
//! Every statement is `IF NOT EXISTS`, so running against an externally
//! provisioned database is a no-op.

/// Postgres schema:
/// - `course` (id, name)
/// - `person` (id, first_name, last_name, type, age)
/// - `person_course` join relation; no uniqueness or foreign keys — the
///   application owns membership consistency via full-replace writes
pub const POSTGRES_INIT: &str = r"
-- ---------------------------------------------------------------------------
-- Courses
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS course (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    name TEXT NOT NULL
);

-- ---------------------------------------------------------------------------
-- People
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS person (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    type TEXT NOT NULL,
    age BIGINT NOT NULL
);

-- ---------------------------------------------------------------------------
-- Course membership (one row per enrollment)
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS person_course (
    person_id BIGINT NOT NULL,
    course_id BIGINT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_person_course_person ON person_course(person_id);
";

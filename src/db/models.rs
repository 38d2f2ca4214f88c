use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row. Also the request payload for course create/update, where
/// any missing field decodes to its zero value and `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

/// A person row plus the materialized course membership.
///
/// `courses` is not a stored column: it is read from `person_course` after
/// the row itself and fully replaced on every write that carries it. A
/// payload without a `courses` field decodes to an empty list, which a
/// create/update then writes back as empty membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub person_type: String,
    pub age: i64,
    #[sqlx(skip)]
    pub courses: Vec<i64>,
}

/// Create responses: `{"id": <generated id>}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InsertedId {
    pub id: i64,
}

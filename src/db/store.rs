use crate::config::Config;
use crate::db::models::{Course, Person};
use crate::db::schema::POSTGRES_INIT;
use crate::error::RosterError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// All SQL the service executes, behind one cloneable handle.
///
/// The pool is owned here and injected through router state; handlers never
/// see a bare connection. Concurrency correctness is delegated to Postgres —
/// the store takes no in-process locks.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// Connects to the configured server, applies the schema, and returns
    /// the handle.
    pub async fn connect(cfg: &Config) -> Result<Self, RosterError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(cfg.connect_options())
            .await?;

        let store = Self { pool };
        store.apply_schema().await?;
        info!("database pool initialized");
        Ok(store)
    }

    /// Wraps an existing pool. Used by tests that provision their own
    /// database.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the DDL statement by statement. `IF NOT EXISTS` makes this
    /// safe against a pre-provisioned schema.
    pub async fn apply_schema(&self) -> Result<(), RosterError> {
        for stmt in POSTGRES_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // -- courses ------------------------------------------------------------

    pub async fn list_courses(&self) -> Result<Vec<Course>, RosterError> {
        let rows = sqlx::query_as::<_, Course>("SELECT id, name FROM course ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn course_by_id(&self, id: i64) -> Result<Option<Course>, RosterError> {
        let row = sqlx::query_as::<_, Course>("SELECT id, name FROM course WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn insert_course(&self, name: &str) -> Result<i64, RosterError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO course (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    /// Updates by id with no existence check: an absent id is a silent
    /// zero-row no-op.
    pub async fn update_course(&self, id: i64, name: &str) -> Result<(), RosterError> {
        sqlx::query("UPDATE course SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Idempotent delete. Membership rows referencing the course are left
    /// in place; the schema declares no foreign keys.
    pub async fn delete_course(&self, id: i64) -> Result<(), RosterError> {
        sqlx::query("DELETE FROM course WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // -- people -------------------------------------------------------------

    /// Lists every person, issuing one membership query per row. At roster
    /// scale the N+1 shape is deliberate; batching would complicate the
    /// read path for no observable gain.
    pub async fn list_persons(&self) -> Result<Vec<Person>, RosterError> {
        let mut rows = sqlx::query_as::<_, Person>(
            "SELECT id, first_name, last_name, type, age FROM person ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        for person in &mut rows {
            person.courses = self.courses_for_person(person.id).await?;
        }
        Ok(rows)
    }

    /// Lookup by primary key. Not reachable over HTTP (the single-segment
    /// person GET resolves to the name lookup), but part of the store's
    /// surface.
    pub async fn person_by_id(&self, id: i64) -> Result<Option<Person>, RosterError> {
        let row = sqlx::query_as::<_, Person>(
            "SELECT id, first_name, last_name, type, age FROM person WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(mut person) => {
                person.courses = self.courses_for_person(person.id).await?;
                Ok(Some(person))
            }
            None => Ok(None),
        }
    }

    /// Matches either name column. When several rows match, whichever the
    /// server returns first wins; the surface has no tiebreaker.
    pub async fn person_by_name(&self, name: &str) -> Result<Option<Person>, RosterError> {
        let row = sqlx::query_as::<_, Person>(
            "SELECT id, first_name, last_name, type, age FROM person \
             WHERE first_name = $1 OR last_name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(mut person) => {
                person.courses = self.courses_for_person(person.id).await?;
                Ok(Some(person))
            }
            None => Ok(None),
        }
    }

    pub async fn insert_person(&self, person: &Person) -> Result<i64, RosterError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO person (first_name, last_name, type, age) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.person_type)
        .bind(person.age)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Updates the four scalar columns by id; absent ids no-op silently,
    /// like `update_course`.
    pub async fn update_person(&self, id: i64, person: &Person) -> Result<(), RosterError> {
        sqlx::query(
            "UPDATE person SET first_name = $1, last_name = $2, type = $3, age = $4 \
             WHERE id = $5",
        )
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.person_type)
        .bind(person.age)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Removes the person's membership rows and the person row in one
    /// transaction.
    pub async fn delete_person(&self, id: i64) -> Result<(), RosterError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM person_course WHERE person_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    // -- course membership --------------------------------------------------

    /// Membership course ids for one person, in insertion order.
    pub async fn courses_for_person(&self, person_id: i64) -> Result<Vec<i64>, RosterError> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT course_id FROM person_course WHERE person_id = $1")
                .bind(person_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(ids)
    }

    /// Full-replace membership sync: drop every row for the person, then
    /// insert one row per supplied course id, in list order. Never a diff.
    /// The whole replace runs in a transaction, so a failed insert rolls
    /// back to the previous membership instead of leaving a partial list.
    pub async fn replace_person_courses(
        &self,
        person_id: i64,
        courses: &[i64],
    ) -> Result<(), RosterError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM person_course WHERE person_id = $1")
            .bind(person_id)
            .execute(&mut *tx)
            .await?;
        for course_id in courses {
            sqlx::query("INSERT INTO person_course (person_id, course_id) VALUES ($1, $2)")
                .bind(person_id)
                .bind(course_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

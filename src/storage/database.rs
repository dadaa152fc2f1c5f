//! SQLite connection management and schema creation.

use super::{CourseRepository, DbConn, EnrollmentRepository, StudentRepository, lock};
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS courses (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS student_course (
    student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
    course_id  INTEGER NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
    PRIMARY KEY (student_id, course_id)
);

CREATE INDEX IF NOT EXISTS idx_student_course_course ON student_course(course_id);
"#;

/// Shared handle to the roster database.
///
/// Cloning is cheap and every clone talks to the same connection; the mutex
/// serializes statements from concurrent requests.
#[derive(Clone)]
pub struct Database {
    conn: DbConn,
}

impl Database {
    /// Open (or create) the database file at `path` and ensure the schema exists.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::debug!(path = %path.display(), "Opening database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        let conn = lock(&self.conn)?;
        // Cascading deletes on student_course depend on this per-connection pragma.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn students(&self) -> StudentRepository {
        StudentRepository::new(self.conn.clone())
    }

    pub fn courses(&self) -> CourseRepository {
        CourseRepository::new(self.conn.clone())
    }

    pub fn enrollments(&self) -> EnrollmentRepository {
        EnrollmentRepository::new(self.conn.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewCourse, NewStudent};
    use tempfile::TempDir;

    #[test]
    fn test_reopen_keeps_data_and_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("roster.sqlite");

        {
            let db = Database::open_at(&path).unwrap();
            db.students()
                .create(&NewStudent::new("Alice", "a@x.com"))
                .unwrap();
            db.courses().create(&NewCourse::new("DB Systems")).unwrap();
        }

        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.students().list().unwrap().len(), 1);
        assert_eq!(db.courses().list().unwrap().len(), 1);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let conn = lock(&db.conn).unwrap();
        let enabled: i64 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}

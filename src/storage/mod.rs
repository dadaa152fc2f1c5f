//! SQLite storage layer for roster.
//!
//! One database file holds three tables:
//!
//! ```sql
//! students(id, name, email UNIQUE)
//! courses(id, name)
//! student_course(student_id, course_id)  -- PRIMARY KEY (student_id, course_id)
//! ```
//!
//! ## Components
//!
//! - [`Database`]: owns the shared connection and creates the schema
//! - [`StudentRepository`]: CRUD and name search for students
//! - [`CourseRepository`]: CRUD and name lookup for courses
//! - [`EnrollmentRepository`]: the many-to-many link between them
//!
//! Every call commits on its own; there are no multi-statement transactions.
//!
//! All calls are synchronous and hold the connection mutex for one statement
//! (or a lookup plus one statement). The GraphQL server invokes them directly
//! from async resolvers, so a slow query blocks that tokio worker thread
//! until SQLite returns. No lock is ever held across an `.await`.

mod course_repository;
mod database;
mod enrollment_repository;
mod student_repository;

pub use course_repository::CourseRepository;
pub use database::Database;
pub use enrollment_repository::EnrollmentRepository;
pub use student_repository::StudentRepository;

use crate::error::{RosterError, Result};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

pub(crate) type DbConn = Arc<Mutex<Connection>>;

pub(crate) fn lock(conn: &DbConn) -> Result<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| RosterError::Storage("database connection lock poisoned".to_string()))
}

/// Escape `%`, `_` and `\` so user input matches literally inside `LIKE ... ESCAPE '\'`.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

use super::{DbConn, escape_like, lock};
use crate::error::Result;
use crate::model::{NewStudent, Outcome, Student, StudentPatch};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub(super) const STUDENT_COLUMNS: &str = "id, name, email";

pub struct StudentRepository {
    conn: DbConn,
}

impl StudentRepository {
    pub(crate) fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert a student. A duplicate email fails on the UNIQUE constraint.
    pub fn create(&self, student: &NewStudent) -> Result<Student> {
        tracing::info!(name = %student.name, email = %student.email, "Creating student");

        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO students (name, email) VALUES (?1, ?2)",
            params![student.name, student.email],
        )?;

        Ok(Student {
            id: conn.last_insert_rowid(),
            name: student.name.clone(),
            email: student.email.clone(),
        })
    }

    pub fn get(&self, id: i64) -> Result<Outcome<Student>> {
        let conn = lock(&self.conn)?;
        Ok(fetch_student(&conn, id)?.into())
    }

    pub fn list(&self) -> Result<Vec<Student>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY id"
        ))?;
        let students = stmt
            .query_map([], row_to_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    /// Case-insensitive substring search on the name. An empty fragment matches everyone.
    pub fn search_by_name(&self, fragment: &str) -> Result<Vec<Student>> {
        let pattern = format!("%{}%", escape_like(fragment));

        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id"
        ))?;
        let students = stmt
            .query_map([pattern], row_to_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    pub fn update(&self, id: i64, patch: StudentPatch) -> Result<Outcome<Student>> {
        tracing::info!(id, "Updating student");

        let conn = lock(&self.conn)?;
        let Some(mut student) = fetch_student(&conn, id)? else {
            return Ok(Outcome::NotFound);
        };

        if patch.is_empty() {
            return Ok(Outcome::Found(student));
        }

        patch.apply(&mut student);
        conn.execute(
            "UPDATE students SET name = ?1, email = ?2 WHERE id = ?3",
            params![student.name, student.email, student.id],
        )?;

        Ok(Outcome::Found(student))
    }

    /// Delete a student; enrollment rows go with it through the cascade.
    pub fn delete(&self, id: i64) -> Result<bool> {
        tracing::info!(id, "Deleting student");

        let conn = lock(&self.conn)?;
        let removed = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

pub(super) fn fetch_student(conn: &Connection, id: i64) -> rusqlite::Result<Option<Student>> {
    conn.query_row(
        &format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?1"),
        params![id],
        row_to_student,
    )
    .optional()
}

pub(super) fn row_to_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

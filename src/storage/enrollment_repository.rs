use super::course_repository::{fetch_course, row_to_course};
use super::student_repository::{fetch_student, row_to_student};
use super::{DbConn, lock};
use crate::error::Result;
use crate::model::{Course, Outcome, Student};
use rusqlite::params;

/// The student/course link table.
///
/// A pair is stored at most once, so enrolling twice is a no-op.
pub struct EnrollmentRepository {
    conn: DbConn,
}

impl EnrollmentRepository {
    pub(crate) fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Link a student to a course.
    ///
    /// Returns `NotFound` without writing anything when either side is missing.
    pub fn enroll(&self, student_id: i64, course_id: i64) -> Result<Outcome<Student>> {
        let conn = lock(&self.conn)?;

        let Some(student) = fetch_student(&conn, student_id)? else {
            tracing::debug!(student_id, course_id, "Enroll skipped: unknown student");
            return Ok(Outcome::NotFound);
        };
        if fetch_course(&conn, course_id)?.is_none() {
            tracing::debug!(student_id, course_id, "Enroll skipped: unknown course");
            return Ok(Outcome::NotFound);
        }

        let inserted = conn.execute(
            "INSERT OR IGNORE INTO student_course (student_id, course_id) VALUES (?1, ?2)",
            params![student_id, course_id],
        )?;
        if inserted > 0 {
            tracing::info!(student_id, course_id, "Enrolled student");
        } else {
            tracing::debug!(student_id, course_id, "Student already enrolled");
        }

        Ok(Outcome::Found(student))
    }

    /// Remove a student from a course.
    ///
    /// Returns `NotFound` when either side is missing or the pair was not linked.
    pub fn unenroll(&self, student_id: i64, course_id: i64) -> Result<Outcome<Student>> {
        let conn = lock(&self.conn)?;

        let Some(student) = fetch_student(&conn, student_id)? else {
            return Ok(Outcome::NotFound);
        };
        if fetch_course(&conn, course_id)?.is_none() {
            return Ok(Outcome::NotFound);
        }

        let removed = conn.execute(
            "DELETE FROM student_course WHERE student_id = ?1 AND course_id = ?2",
            params![student_id, course_id],
        )?;
        if removed == 0 {
            tracing::debug!(student_id, course_id, "Unenroll skipped: not enrolled");
            return Ok(Outcome::NotFound);
        }

        tracing::info!(student_id, course_id, "Unenrolled student");
        Ok(Outcome::Found(student))
    }

    pub fn courses_of(&self, student_id: i64) -> Result<Vec<Course>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(
            r#"
            SELECT c.id, c.name
            FROM courses c
            JOIN student_course sc ON sc.course_id = c.id
            WHERE sc.student_id = ?1
            ORDER BY c.id
            "#,
        )?;
        let courses = stmt
            .query_map(params![student_id], row_to_course)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(courses)
    }

    pub fn students_of(&self, course_id: i64) -> Result<Vec<Student>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(
            r#"
            SELECT s.id, s.name, s.email
            FROM students s
            JOIN student_course sc ON sc.student_id = s.id
            WHERE sc.course_id = ?1
            ORDER BY s.id
            "#,
        )?;
        let students = stmt
            .query_map(params![course_id], row_to_student)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(students)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = lock(&self.conn)?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM student_course", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Course, NewCourse, NewStudent, Outcome, Student};
    use crate::storage::Database;

    fn setup() -> (Database, Student, Course) {
        let db = Database::open_in_memory().unwrap();
        let alice = db
            .students()
            .create(&NewStudent::new("Alice", "a@x.com"))
            .unwrap();
        let course = db.courses().create(&NewCourse::new("DB Systems")).unwrap();
        (db, alice, course)
    }

    #[test]
    fn test_enroll_links_both_directions() {
        let (db, alice, course) = setup();
        let repo = db.enrollments();

        assert_eq!(
            repo.enroll(alice.id, course.id).unwrap(),
            Outcome::Found(alice.clone())
        );

        assert_eq!(repo.courses_of(alice.id).unwrap(), vec![course.clone()]);
        assert_eq!(repo.students_of(course.id).unwrap(), vec![alice]);
    }

    #[test]
    fn test_enroll_twice_keeps_one_row() {
        let (db, alice, course) = setup();
        let repo = db.enrollments();

        assert!(repo.enroll(alice.id, course.id).unwrap().is_found());
        assert!(repo.enroll(alice.id, course.id).unwrap().is_found());

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.students_of(course.id).unwrap().len(), 1);
    }

    #[test]
    fn test_enroll_unknown_ids_writes_nothing() {
        let (db, alice, course) = setup();
        let repo = db.enrollments();

        assert_eq!(repo.enroll(alice.id + 100, course.id).unwrap(), Outcome::NotFound);
        assert_eq!(repo.enroll(alice.id, course.id + 100).unwrap(), Outcome::NotFound);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_unenroll() {
        let (db, alice, course) = setup();
        let repo = db.enrollments();

        // Not enrolled yet
        assert_eq!(repo.unenroll(alice.id, course.id).unwrap(), Outcome::NotFound);

        repo.enroll(alice.id, course.id).unwrap();
        assert_eq!(
            repo.unenroll(alice.id, course.id).unwrap(),
            Outcome::Found(alice.clone())
        );
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.courses_of(alice.id).unwrap().is_empty());
    }

    #[test]
    fn test_unenroll_unknown_ids_leaves_links_alone() {
        let (db, alice, course) = setup();
        let repo = db.enrollments();
        repo.enroll(alice.id, course.id).unwrap();

        assert_eq!(
            repo.unenroll(alice.id + 100, course.id).unwrap(),
            Outcome::NotFound
        );
        assert_eq!(
            repo.unenroll(alice.id, course.id + 100).unwrap(),
            Outcome::NotFound
        );

        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.courses_of(alice.id).unwrap(), vec![course]);
    }

    #[test]
    fn test_deleting_student_cascades() {
        let (db, alice, course) = setup();
        db.enrollments().enroll(alice.id, course.id).unwrap();

        assert!(db.students().delete(alice.id).unwrap());

        assert_eq!(db.enrollments().count().unwrap(), 0);
        assert!(db.enrollments().students_of(course.id).unwrap().is_empty());
    }

    #[test]
    fn test_deleting_course_cascades() {
        let (db, alice, course) = setup();
        db.enrollments().enroll(alice.id, course.id).unwrap();

        assert!(db.courses().delete(course.id).unwrap());

        assert_eq!(db.enrollments().count().unwrap(), 0);
        assert!(db.enrollments().courses_of(alice.id).unwrap().is_empty());
    }
}

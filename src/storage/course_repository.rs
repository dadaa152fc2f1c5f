use super::{DbConn, escape_like, lock};
use crate::error::Result;
use crate::model::{Course, CoursePatch, NewCourse, Outcome};
use rusqlite::{Connection, OptionalExtension, Row, params};

pub(super) const COURSE_COLUMNS: &str = "id, name";

pub struct CourseRepository {
    conn: DbConn,
}

impl CourseRepository {
    pub(crate) fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn create(&self, course: &NewCourse) -> Result<Course> {
        tracing::info!(name = %course.name, "Creating course");

        let conn = lock(&self.conn)?;
        conn.execute("INSERT INTO courses (name) VALUES (?1)", params![course.name])?;

        Ok(Course {
            id: conn.last_insert_rowid(),
            name: course.name.clone(),
        })
    }

    pub fn get(&self, id: i64) -> Result<Outcome<Course>> {
        let conn = lock(&self.conn)?;
        Ok(fetch_course(&conn, id)?.into())
    }

    pub fn list(&self) -> Result<Vec<Course>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id"
        ))?;
        let courses = stmt
            .query_map([], row_to_course)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(courses)
    }

    /// Courses whose name equals `name`, ignoring case. Unlike student search
    /// this is not a substring match.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Course>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id"
        ))?;
        let courses = stmt
            .query_map([escape_like(name)], row_to_course)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(courses)
    }

    /// The oldest course matching `name` exactly, ignoring case.
    pub fn first_by_name(&self, name: &str) -> Result<Outcome<Course>> {
        Ok(self.find_by_name(name)?.into_iter().next().into())
    }

    pub fn update(&self, id: i64, patch: CoursePatch) -> Result<Outcome<Course>> {
        tracing::info!(id, "Updating course");

        let conn = lock(&self.conn)?;
        let Some(mut course) = fetch_course(&conn, id)? else {
            return Ok(Outcome::NotFound);
        };

        if patch.is_empty() {
            return Ok(Outcome::Found(course));
        }

        patch.apply(&mut course);
        conn.execute(
            "UPDATE courses SET name = ?1 WHERE id = ?2",
            params![course.name, course.id],
        )?;

        Ok(Outcome::Found(course))
    }

    /// Delete a course; enrollment rows go with it through the cascade.
    pub fn delete(&self, id: i64) -> Result<bool> {
        tracing::info!(id, "Deleting course");

        let conn = lock(&self.conn)?;
        let removed = conn.execute("DELETE FROM courses WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

pub(super) fn fetch_course(conn: &Connection, id: i64) -> rusqlite::Result<Option<Course>> {
    conn.query_row(
        &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"),
        params![id],
        row_to_course,
    )
    .optional()
}

pub(super) fn row_to_course(row: &Row) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
mod tests {
    use crate::model::{CoursePatch, NewCourse, Outcome};
    use crate::storage::Database;

    #[test]
    fn test_find_by_name_is_exact_and_case_insensitive() {
        let db = Database::open_in_memory().unwrap();
        let repo = db.courses();
        let python = repo.create(&NewCourse::new("Python")).unwrap();
        repo.create(&NewCourse::new("Python Basics")).unwrap();

        assert_eq!(repo.find_by_name("Python").unwrap(), vec![python.clone()]);
        assert_eq!(repo.find_by_name("pYTHON").unwrap(), vec![python]);
        assert!(repo.find_by_name("Pyth").unwrap().is_empty());
        assert!(repo.find_by_name("Python%").unwrap().is_empty());
    }

    #[test]
    fn test_first_by_name_picks_oldest() {
        let db = Database::open_in_memory().unwrap();
        let repo = db.courses();
        let first = repo.create(&NewCourse::new("Art")).unwrap();
        repo.create(&NewCourse::new("art")).unwrap();

        assert_eq!(repo.first_by_name("ART").unwrap(), Outcome::Found(first));
        assert_eq!(repo.first_by_name("Music").unwrap(), Outcome::NotFound);
    }

    #[test]
    fn test_update_and_delete() {
        let db = Database::open_in_memory().unwrap();
        let repo = db.courses();
        let course = repo.create(&NewCourse::new("Web Dev")).unwrap();

        let renamed = repo
            .update(course.id, CoursePatch::default().with_name("Web Development"))
            .unwrap();
        assert!(renamed.is_found());
        assert_eq!(repo.list().unwrap()[0].name, "Web Development");

        assert_eq!(
            repo.update(course.id + 1, CoursePatch::default().with_name("x"))
                .unwrap(),
            Outcome::NotFound
        );

        assert!(repo.delete(course.id).unwrap());
        assert!(!repo.delete(course.id).unwrap());
        assert!(repo.list().unwrap().is_empty());
    }
}

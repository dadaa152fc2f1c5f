//! Sample dataset for demos and manual testing.

use crate::error::Result;
use crate::model::{NewCourse, NewStudent};
use crate::storage::Database;

const STUDENTS: [(&str, &str); 3] = [
    ("Alice Johnson", "alice@example.com"),
    ("Bob Smith", "bob@example.com"),
    ("Charlie Brown", "charlie@example.com"),
];

const COURSES: [&str; 3] = ["Introduction to Python", "Web Development", "Database Systems"];

/// (student index, course index) pairs into the arrays above
const ENROLLMENTS: [(usize, usize); 6] = [(0, 0), (0, 1), (1, 1), (1, 2), (2, 0), (2, 2)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded {
        students: usize,
        courses: usize,
        enrollments: usize,
    },
    /// Students already exist; nothing was written.
    AlreadyPopulated,
}

pub fn seed_sample_data(db: &Database) -> Result<SeedOutcome> {
    if db.students().count()? > 0 {
        tracing::info!("Database already has students, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let students = STUDENTS
        .iter()
        .map(|(name, email)| db.students().create(&NewStudent::new(*name, *email)))
        .collect::<Result<Vec<_>>>()?;
    let courses = COURSES
        .iter()
        .map(|name| db.courses().create(&NewCourse::new(*name)))
        .collect::<Result<Vec<_>>>()?;

    let enrollments = db.enrollments();
    for (s, c) in ENROLLMENTS {
        let _ = enrollments.enroll(students[s].id, courses[c].id)?;
    }

    Ok(SeedOutcome::Seeded {
        students: students.len(),
        courses: courses.len(),
        enrollments: enrollments.count()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_once() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(
            seed_sample_data(&db).unwrap(),
            SeedOutcome::Seeded {
                students: 3,
                courses: 3,
                enrollments: 6
            }
        );
        assert_eq!(seed_sample_data(&db).unwrap(), SeedOutcome::AlreadyPopulated);

        assert_eq!(db.students().count().unwrap(), 3);
        assert_eq!(db.courses().list().unwrap().len(), 3);
        assert_eq!(db.enrollments().count().unwrap(), 6);
    }

    #[test]
    fn test_seeded_course_members() {
        let db = Database::open_in_memory().unwrap();
        seed_sample_data(&db).unwrap();

        let web = db
            .courses()
            .first_by_name("web development")
            .unwrap()
            .into_option()
            .unwrap();
        let names: Vec<_> = db
            .enrollments()
            .students_of(web.id)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith"]);
    }
}

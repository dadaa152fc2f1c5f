use crate::model::{self, Course as ModelCourse, Student as ModelStudent};
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::database;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[ComplexObject]
impl Student {
    /// Courses this student is enrolled in
    async fn courses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Course>> {
        let db = database(ctx)?;
        let courses = db.enrollments().courses_of(self.id)?;
        Ok(courses.into_iter().map(Course::from).collect())
    }
}

impl From<ModelStudent> for Student {
    fn from(s: ModelStudent) -> Self {
        Self {
            id: s.id,
            name: s.name,
            email: s.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

#[ComplexObject]
impl Course {
    /// Students enrolled in this course
    async fn students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        let db = database(ctx)?;
        let students = db.enrollments().students_of(self.id)?;
        Ok(students.into_iter().map(Student::from).collect())
    }
}

impl From<ModelCourse> for Course {
    fn from(c: ModelCourse) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// Convert a found/not-found outcome into a nullable GraphQL value.
pub(super) fn nullable<T, U: From<T>>(outcome: model::Outcome<T>) -> Option<U> {
    outcome.into_option().map(U::from)
}

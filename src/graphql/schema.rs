use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::{CoursePatch, NewCourse, NewStudent, StudentPatch};
use crate::storage::Database;

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around an already opened database.
///
/// The caller owns the database lifecycle; resolvers only borrow the handle.
pub fn build_schema(db: Database) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

pub(super) fn database<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Database> {
    ctx.data::<Database>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All students in insertion order
    async fn all_students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        let students = database(ctx)?.students().list()?;
        Ok(students.into_iter().map(Student::from).collect())
    }

    /// All courses in insertion order
    async fn all_courses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Course>> {
        let courses = database(ctx)?.courses().list()?;
        Ok(courses.into_iter().map(Course::from).collect())
    }

    /// Get a single student by ID
    async fn student_by_id(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<Student>> {
        Ok(nullable(database(ctx)?.students().get(id)?))
    }

    /// Get a single course by ID
    async fn course_by_id(
        &self,
        ctx: &Context<'_>,
        id: i64,
    ) -> async_graphql::Result<Option<Course>> {
        Ok(nullable(database(ctx)?.courses().get(id)?))
    }

    /// Students whose name contains `name`, ignoring case
    async fn students_by_name(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Vec<Student>> {
        let students = database(ctx)?.students().search_by_name(&name)?;
        Ok(students.into_iter().map(Student::from).collect())
    }

    /// Courses whose name is exactly `name`, ignoring case
    async fn courses_by_name(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Vec<Course>> {
        let courses = database(ctx)?.courses().find_by_name(&name)?;
        Ok(courses.into_iter().map(Course::from).collect())
    }

    /// Students enrolled in the course named `course_name`
    async fn students_by_course(
        &self,
        ctx: &Context<'_>,
        course_name: String,
    ) -> async_graphql::Result<Vec<Student>> {
        let db = database(ctx)?;
        let Some(course) = db.courses().first_by_name(&course_name)?.into_option() else {
            return Ok(Vec::new());
        };
        let students = db.enrollments().students_of(course.id)?;
        Ok(students.into_iter().map(Student::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new student
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> async_graphql::Result<Student> {
        let student = database(ctx)?
            .students()
            .create(&NewStudent::new(name, email))?;
        Ok(student.into())
    }

    /// Create a new course
    async fn add_course(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Course> {
        let course = database(ctx)?.courses().create(&NewCourse::new(name))?;
        Ok(course.into())
    }

    /// Update the given fields of a student; null if the student does not exist
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: Option<String>,
        email: Option<String>,
    ) -> async_graphql::Result<Option<Student>> {
        let patch = StudentPatch { name, email };
        Ok(nullable(database(ctx)?.students().update(id, patch)?))
    }

    /// Rename a course; null if the course does not exist
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: i64,
        name: String,
    ) -> async_graphql::Result<Option<Course>> {
        let patch = CoursePatch::default().with_name(name);
        Ok(nullable(database(ctx)?.courses().update(id, patch)?))
    }

    /// Delete a student and their enrollments
    async fn delete_student(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<bool> {
        Ok(database(ctx)?.students().delete(id)?)
    }

    /// Delete a course and its enrollments
    async fn delete_course(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<bool> {
        Ok(database(ctx)?.courses().delete(id)?)
    }

    /// Enroll a student in a course; null if either does not exist
    async fn enroll_student(
        &self,
        ctx: &Context<'_>,
        student_id: i64,
        course_id: i64,
    ) -> async_graphql::Result<Option<Student>> {
        Ok(nullable(
            database(ctx)?.enrollments().enroll(student_id, course_id)?,
        ))
    }

    /// Remove a student from a course; null if either does not exist or the
    /// student was not enrolled
    async fn unenroll_student(
        &self,
        ctx: &Context<'_>,
        student_id: i64,
        course_id: i64,
    ) -> async_graphql::Result<Option<Student>> {
        Ok(nullable(
            database(ctx)?.enrollments().unenroll(student_id, course_id)?,
        ))
    }
}

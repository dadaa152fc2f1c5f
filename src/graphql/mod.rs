//! GraphQL schema and resolvers for roster.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at /graphql)
//! roster serve --port 4000
//!
//! # Execute a query from CLI
//! roster query '{ studentsByCourse(courseName: "Web Development") { name email } }'
//!
//! # Execute a mutation from CLI
//! roster mutate 'enrollStudent(studentId: 1, courseId: 2) { name courses { name } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `allStudents`, `allCourses`, `studentById`, `courseById`,
//!   `studentsByName`, `coursesByName`, `studentsByCourse`
//! - **Mutations**: `addStudent`, `addCourse`, `updateStudent`, `updateCourse`,
//!   `deleteStudent`, `deleteCourse`, `enrollStudent`, `unenrollStudent`
//!
//! Lookups that miss return `null` (or `false` for deletes); errors are
//! reserved for storage failures such as a duplicate student email.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RosterSchema, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::{Course, Student};

//! Data models for roster.
//!
//! - [`Student`]: an enrolled person, with a unique email
//! - [`Course`]: something students enroll in
//! - [`StudentPatch`], [`CoursePatch`]: partial updates
//! - [`Outcome`]: found / not-found result for addressed operations

mod course;
mod outcome;
mod student;

pub use course::{Course, CoursePatch, NewCourse};
pub use outcome::Outcome;
pub use student::{NewStudent, Student, StudentPatch};

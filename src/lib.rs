//! # Roster - a student and course enrollment API
//!
//! Roster keeps students, courses and the enrollments between them in a
//! SQLite database and exposes them through a GraphQL API, either over HTTP
//! or as one-shot CLI commands.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .roster.yml and the database
//! roster init
//!
//! # Add some sample data
//! roster seed
//!
//! # Ask who takes a course
//! roster query '{ studentsByCourse(courseName: "Database Systems") { name } }'
//!
//! # Serve GraphQL + GraphiQL on http://127.0.0.1:4000/graphql
//! roster serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Student, Course, patches)
//! - [`storage`]: SQLite schema and repositories

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.roster.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RosterError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server hosting it.
pub mod graphql;

/// Data models for roster.
pub mod model;

/// SQLite storage layer.
///
/// Creates the schema on open and provides one repository per table.
pub mod storage;

pub mod logging;
pub mod seed;

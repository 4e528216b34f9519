//! # empdesk - employee records over GraphQL
//!
//! empdesk exposes a GraphQL API over two MongoDB collections, employees and
//! users, with password-based sign-up and login.
//!
//! ## Features
//!
//! - **Employee CRUD**: add, list, look up, search, partially update and delete
//! - **Accounts**: sign-up with argon2-hashed passwords and a login check
//! - **Validation**: every mutation checks its arguments before touching the store
//! - **Pluggable storage**: MongoDB in production, an in-memory store for tests
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server against a local MongoDB
//! MONGO_URI=mongodb://localhost:27017 empdesk serve --port 5000
//!
//! # Try it without a database
//! empdesk --backend memory serve
//! ```
//!
//! ## Modules
//!
//! - [`auth`]: Password hashing and verification
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Employee and user documents
//! - [`storage`]: Repository traits and their MongoDB/memory backends
//! - [`validation`]: Mutation argument rules

/// Password hashing with argon2.
pub mod auth;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Reads `empdesk.yml`, then applies CLI/environment overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `EmpdeskError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
pub mod graphql;

/// Data models.
///
/// Includes `Employee`, `EmployeeFields`, `NewEmployee`, `User` and `NewUser`.
pub mod model;

/// Storage layer.
///
/// Repository traits plus MongoDB and in-memory implementations.
pub mod storage;

/// Input validation for mutations.
pub mod validation;

pub mod logging;

//! GraphQL schema, resolvers and HTTP transport.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://localhost:5000/graphql)
//! empdesk serve --port 5000
//!
//! # Execute a query from the CLI
//! empdesk query '{ searchEmployees(searchTerm: "eng") { id first_name department } }'
//!
//! # Execute a mutation from the CLI
//! empdesk mutate 'deleteEmployee(eid: "65f1c0ffee0000000000beef")'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getAllEmployees`, `getEmployeeById`, `searchEmployees`,
//!   `searchEmployeesByDeptOrDesignation`, `login`
//! - **Mutations**: `signup`, `addEmployee`, `updateEmployee`, `deleteEmployee`
//!
//! Errors carry an `extensions.code` such as `VALIDATION`, `INVALID_ID`,
//! `PERSISTENCE` or `TIMEOUT`.

mod schema;
mod server;
mod types;

pub use schema::{EmpdeskSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, bind, router, run_server};
pub use types::*;

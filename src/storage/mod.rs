//! Storage layer for employees and users.
//!
//! Collections are accessed through the [`EmployeeRepository`] and
//! [`UserRepository`] traits, so resolvers never see which backend is live.
//!
//! ## Backends
//!
//! - MongoDB ([`MongoStore`]): collections `employees` and `users`, with a
//!   unique index on `users.username`
//! - Memory ([`MemoryEmployeeRepository`], [`MemoryUserRepository`]): used by
//!   tests and `--backend memory`
//!
//! ## Documents
//!
//! ```json
//! {
//!   "_id": { "$oid": "65f1c0ffee0000000000beef" },
//!   "first_name": "Ada",
//!   "last_name": "Lovelace",
//!   "email": "ada@example.com",
//!   "designation": "Engineer",
//!   "salary": 5000.0,
//!   "department": "R&D",
//!   "created_at": "2024-01-15T10:30:00Z",
//!   "updated_at": "2024-01-15T10:30:00Z"
//! }
//! ```

mod memory_repository;
mod mongo_repository;
mod repository;

pub use memory_repository::{MemoryEmployeeRepository, MemoryUserRepository};
pub use mongo_repository::{
    EMPLOYEES_COLLECTION, MongoEmployeeRepository, MongoStore, MongoUserRepository,
    USERS_COLLECTION,
};
pub use repository::{EmployeeRepository, Store, UserRepository};

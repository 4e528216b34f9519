//! Data models for empdesk.
//!
//! - [`Employee`]: a stored employee document, plus [`NewEmployee`] and
//!   [`EmployeeFields`] for client-supplied (possibly partial) field sets
//! - [`User`]: a stored user account holding a password hash, plus [`NewUser`]
//!
//! Identifiers are MongoDB `ObjectId`s regardless of the storage backend.

mod employee;
mod user;

pub use employee::{Employee, EmployeeFields, NewEmployee};
pub use user::{NewUser, User};

pub use mongodb::bson::oid::ObjectId;

use crate::error::{EmpdeskError, Result};

/// Parses a client-supplied identifier.
///
/// A malformed id is reported as [`EmpdeskError::InvalidId`], which callers
/// must keep distinct from a well-formed id that matches nothing.
pub fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id.trim()).map_err(|_| EmpdeskError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }

    #[test]
    fn test_parse_object_id_malformed() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(EmpdeskError::InvalidId(_))
        ));
        assert!(matches!(parse_object_id(""), Err(EmpdeskError::InvalidId(_))));
    }
}

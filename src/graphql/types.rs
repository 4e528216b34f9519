use crate::model::{Employee as ModelEmployee, User as ModelUser};
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone)]
#[graphql(rename_fields = "snake_case")]
pub struct Employee {
    pub id: ID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Option<String>,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: Option<String>,
    pub department: String,
    pub employee_photo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ModelEmployee> for Employee {
    fn from(e: ModelEmployee) -> Self {
        Self {
            id: ID(e.id.to_hex()),
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            gender: e.gender,
            designation: e.designation,
            salary: e.salary,
            date_of_joining: e.date_of_joining,
            department: e.department,
            employee_photo: e.employee_photo,
            created_at: e.created_at.to_rfc3339(),
            updated_at: e.updated_at.to_rfc3339(),
        }
    }
}

/// Public view of a user account. The password hash has no field here.
#[derive(SimpleObject, Clone)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: ID(u.id.to_hex()),
            username: u.username,
            email: u.email,
        }
    }
}

pub const LOGIN_USER_NOT_FOUND: &str = "User not found!";
pub const LOGIN_INVALID_PASSWORD: &str = "Invalid password!";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found!";

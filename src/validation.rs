//! Input validation for mutations.
//!
//! Every rule set runs before anything touches the store and stops at the
//! first failing rule.

use crate::error::{EmpdeskError, Result};
use crate::model::{EmployeeFields, NewEmployee};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Lowest salary an employee may be stored with.
pub const MIN_SALARY: f64 = 1000.0;

pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const MSG_SALARY_TOO_LOW: &str = "Salary must be at least 1000.";
pub const MSG_ID_REQUIRED: &str = "Employee ID is required.";

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn require(value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EmpdeskError::validation(MSG_ALL_FIELDS_REQUIRED)),
    }
}

/// Validates an email address. Only the presence of `@` is checked.
pub fn validate_email(email: &str) -> Result<()> {
    if !email.contains('@') {
        return Err(EmpdeskError::validation(MSG_INVALID_EMAIL));
    }
    Ok(())
}

/// Validates a salary against [`MIN_SALARY`]. NaN is rejected.
pub fn validate_salary(salary: f64) -> Result<()> {
    if salary.is_nan() || salary < MIN_SALARY {
        return Err(EmpdeskError::validation(MSG_SALARY_TOO_LOW));
    }
    Ok(())
}

/// Validates signup arguments.
pub fn validate_signup(
    username: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<()> {
    if !present(username) || !present(email) || !present(password) {
        return Err(EmpdeskError::validation(MSG_ALL_FIELDS_REQUIRED));
    }
    validate_email(email.unwrap_or_default())?;
    if password.unwrap_or_default().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(EmpdeskError::validation(MSG_PASSWORD_TOO_SHORT));
    }
    Ok(())
}

/// Validates the arguments of `addEmployee` and turns them into a [`NewEmployee`].
///
/// first_name, last_name, email, designation, salary and department are
/// mandatory; gender, date_of_joining and employee_photo are not.
pub fn validate_new_employee(fields: EmployeeFields) -> Result<NewEmployee> {
    let EmployeeFields {
        first_name,
        last_name,
        email,
        gender,
        designation,
        salary,
        date_of_joining,
        department,
        employee_photo,
    } = fields;

    let first_name = require(first_name)?;
    let last_name = require(last_name)?;
    let email = require(email)?;
    let designation = require(designation)?;
    let salary = salary.ok_or_else(|| EmpdeskError::validation(MSG_ALL_FIELDS_REQUIRED))?;
    let department = require(department)?;

    validate_email(&email)?;
    validate_salary(salary)?;

    Ok(NewEmployee {
        first_name,
        last_name,
        email,
        gender,
        designation,
        salary,
        date_of_joining,
        department,
        employee_photo,
    })
}

/// Validates an employee id argument and returns it.
pub fn validate_employee_id(id: Option<&str>) -> Result<&str> {
    match id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(EmpdeskError::validation(MSG_ID_REQUIRED)),
    }
}

/// Validates the arguments of `updateEmployee`.
///
/// Only fields that were actually supplied are checked.
pub fn validate_employee_update<'a>(id: Option<&'a str>, fields: &EmployeeFields) -> Result<&'a str> {
    let id = validate_employee_id(id)?;
    if let Some(email) = fields.email.as_deref() {
        validate_email(email)?;
    }
    if let Some(salary) = fields.salary {
        validate_salary(salary)?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_employee() -> EmployeeFields {
        EmployeeFields {
            first_name: Some("Linus".to_string()),
            last_name: Some("Torvalds".to_string()),
            email: Some("linus@kernel.org".to_string()),
            gender: None,
            designation: Some("Maintainer".to_string()),
            salary: Some(1000.0),
            date_of_joining: None,
            department: Some("Kernel".to_string()),
            employee_photo: None,
        }
    }

    fn message(result: Result<impl std::fmt::Debug>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_signup_valid() {
        assert!(validate_signup(Some("ada"), Some("ada@example.com"), Some("secret")).is_ok());
    }

    #[test]
    fn test_signup_missing_field() {
        assert_eq!(
            message(validate_signup(Some("ada"), None, Some("secret"))),
            MSG_ALL_FIELDS_REQUIRED
        );
        assert_eq!(
            message(validate_signup(Some(""), Some("ada@example.com"), Some("secret"))),
            MSG_ALL_FIELDS_REQUIRED
        );
    }

    #[test]
    fn test_signup_rules_run_in_order() {
        // Bad email and short password: the email rule fires first.
        assert_eq!(
            message(validate_signup(Some("ada"), Some("ada.example.com"), Some("123"))),
            MSG_INVALID_EMAIL
        );
        assert_eq!(
            message(validate_signup(Some("ada"), Some("ada@example.com"), Some("12345"))),
            MSG_PASSWORD_TOO_SHORT
        );
    }

    #[test]
    fn test_new_employee_valid_at_minimum_salary() {
        let emp = validate_new_employee(full_employee()).unwrap();
        assert_eq!(emp.salary, 1000.0);
        assert_eq!(emp.department, "Kernel");
    }

    #[test]
    fn test_new_employee_salary_below_minimum() {
        let mut fields = full_employee();
        fields.salary = Some(999.0);
        assert_eq!(message(validate_new_employee(fields)), MSG_SALARY_TOO_LOW);

        let mut fields = full_employee();
        fields.salary = Some(f64::NAN);
        assert_eq!(message(validate_new_employee(fields)), MSG_SALARY_TOO_LOW);
    }

    #[test]
    fn test_new_employee_missing_required() {
        let mut fields = full_employee();
        fields.department = None;
        assert_eq!(message(validate_new_employee(fields)), MSG_ALL_FIELDS_REQUIRED);

        let mut fields = full_employee();
        fields.salary = None;
        assert_eq!(message(validate_new_employee(fields)), MSG_ALL_FIELDS_REQUIRED);
    }

    #[test]
    fn test_new_employee_presence_checked_before_format() {
        let mut fields = full_employee();
        fields.email = Some("no-at-sign".to_string());
        fields.last_name = None;
        assert_eq!(message(validate_new_employee(fields)), MSG_ALL_FIELDS_REQUIRED);
    }

    #[test]
    fn test_update_requires_id() {
        let fields = EmployeeFields::default();
        assert_eq!(message(validate_employee_update(None, &fields)), MSG_ID_REQUIRED);
        assert_eq!(message(validate_employee_update(Some("  "), &fields)), MSG_ID_REQUIRED);
    }

    #[test]
    fn test_update_only_checks_supplied_fields() {
        let fields = EmployeeFields {
            first_name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_employee_update(Some("abc"), &fields).unwrap(), "abc");

        let fields = EmployeeFields {
            salary: Some(500.0),
            ..Default::default()
        };
        assert_eq!(message(validate_employee_update(Some("abc"), &fields)), MSG_SALARY_TOO_LOW);

        let fields = EmployeeFields {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert_eq!(message(validate_employee_update(Some("abc"), &fields)), MSG_INVALID_EMAIL);
    }
}

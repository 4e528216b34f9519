use super::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    pub designation: String,
    pub salary: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<String>,

    pub department: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_photo: Option<String>,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

/// A validated employee that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Option<String>,
    pub designation: String,
    pub salary: f64,
    pub date_of_joining: Option<String>,
    pub department: String,
    pub employee_photo: Option<String>,
}

impl NewEmployee {
    /// Assigns an identity and creation timestamps.
    pub fn into_employee(self) -> Employee {
        let now = Utc::now();
        Employee {
            id: ObjectId::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            gender: self.gender,
            designation: self.designation,
            salary: self.salary,
            date_of_joining: self.date_of_joining,
            department: self.department,
            employee_photo: self.employee_photo,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Employee fields as supplied by a client. On update, `None` leaves the
/// stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<String>,
    pub department: Option<String>,
    pub employee_photo: Option<String>,
}

impl Employee {
    /// Merges every supplied field into this document.
    pub fn apply(&mut self, fields: EmployeeFields) {
        if let Some(v) = fields.first_name {
            self.first_name = v;
        }
        if let Some(v) = fields.last_name {
            self.last_name = v;
        }
        if let Some(v) = fields.email {
            self.email = v;
        }
        if fields.gender.is_some() {
            self.gender = fields.gender;
        }
        if let Some(v) = fields.designation {
            self.designation = v;
        }
        if let Some(v) = fields.salary {
            self.salary = v;
        }
        if fields.date_of_joining.is_some() {
            self.date_of_joining = fields.date_of_joining;
        }
        if let Some(v) = fields.department {
            self.department = v;
        }
        if fields.employee_photo.is_some() {
            self.employee_photo = fields.employee_photo;
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        NewEmployee {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            gender: Some("Female".to_string()),
            designation: "Rear Admiral".to_string(),
            salary: 9000.0,
            date_of_joining: Some("1943-12-01".to_string()),
            department: "Navy".to_string(),
            employee_photo: None,
        }
        .into_employee()
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut emp = sample();
        let before = emp.clone();

        emp.apply(EmployeeFields {
            salary: Some(5000.0),
            ..Default::default()
        });

        assert_eq!(emp.salary, 5000.0);
        assert_eq!(emp.id, before.id);
        assert_eq!(emp.first_name, before.first_name);
        assert_eq!(emp.email, before.email);
        assert_eq!(emp.gender, before.gender);
        assert_eq!(emp.date_of_joining, before.date_of_joining);
        assert_eq!(emp.created_at, before.created_at);
        assert!(emp.updated_at >= before.updated_at);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Grace Hopper");
    }
}

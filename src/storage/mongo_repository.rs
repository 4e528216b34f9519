use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc, to_bson};
use mongodb::options::{ClientOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};

use super::repository::{EmployeeRepository, UserRepository};
use crate::config::DatabaseSettings;
use crate::error::Result;
use crate::model::{Employee, EmployeeFields, NewEmployee, NewUser, User, parse_object_id};

pub const EMPLOYEES_COLLECTION: &str = "employees";
pub const USERS_COLLECTION: &str = "users";

/// A connected MongoDB client bound to one database.
pub struct MongoStore {
    employees: Collection<Employee>,
    users: Collection<User>,
}

impl MongoStore {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let mut options = ClientOptions::parse(&settings.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.connect_timeout = Some(settings.timeout());
        options.server_selection_timeout = Some(settings.timeout());

        let client = Client::with_options(options)?;
        let db = client.database(&settings.name);

        let store = Self {
            employees: db.collection(EMPLOYEES_COLLECTION),
            users: db.collection(USERS_COLLECTION),
        };
        store.ensure_indexes().await?;

        tracing::info!(database = %settings.name, "Connected to MongoDB");
        Ok(store)
    }

    async fn ensure_indexes(&self) -> Result<()> {
        let unique_username = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users.create_index(unique_username).await?;
        Ok(())
    }

    pub fn employees(&self) -> MongoEmployeeRepository {
        MongoEmployeeRepository {
            collection: self.employees.clone(),
        }
    }

    pub fn users(&self) -> MongoUserRepository {
        MongoUserRepository {
            collection: self.users.clone(),
        }
    }
}

pub struct MongoEmployeeRepository {
    collection: Collection<Employee>,
}

/// Builds the `$set` document for a partial update. Only supplied fields appear.
fn set_document(fields: EmployeeFields) -> Result<Document> {
    let mut set = Document::new();
    let strings = [
        ("first_name", fields.first_name),
        ("last_name", fields.last_name),
        ("email", fields.email),
        ("gender", fields.gender),
        ("designation", fields.designation),
        ("date_of_joining", fields.date_of_joining),
        ("department", fields.department),
        ("employee_photo", fields.employee_photo),
    ];
    for (key, value) in strings {
        if let Some(value) = value {
            set.insert(key, value);
        }
    }
    if let Some(salary) = fields.salary {
        set.insert("salary", salary);
    }
    set.insert("updated_at", to_bson(&chrono::Utc::now())?);
    Ok(set)
}

fn contains_ignore_case(term: &str) -> Document {
    doc! { "$regex": regex::escape(term), "$options": "i" }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>> {
        let oid = parse_object_id(id)?;
        Ok(self.collection.find_one(doc! { "_id": oid }).await?)
    }

    async fn search(&self, term: &str) -> Result<Vec<Employee>> {
        let filter = doc! {
            "$or": [
                { "department": contains_ignore_case(term) },
                { "designation": contains_ignore_case(term) },
            ]
        };
        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn filter_by_exact_fields(
        &self,
        department: Option<&str>,
        designation: Option<&str>,
    ) -> Result<Vec<Employee>> {
        let mut filter = Document::new();
        if let Some(department) = department {
            filter.insert("department", department);
        }
        if let Some(designation) = designation {
            filter.insert("designation", designation);
        }
        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, employee: NewEmployee) -> Result<Employee> {
        let employee = employee.into_employee();
        self.collection.insert_one(&employee).await?;
        Ok(employee)
    }

    async fn update_partial(&self, id: &str, fields: EmployeeFields) -> Result<Option<Employee>> {
        let oid = parse_object_id(id)?;
        let update = doc! { "$set": set_document(fields)? };
        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User> {
        let user = user.into_user();
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_only_has_supplied_fields() {
        let set = set_document(EmployeeFields {
            salary: Some(5000.0),
            department: Some("Ops".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(set.get_f64("salary").unwrap(), 5000.0);
        assert_eq!(set.get_str("department").unwrap(), "Ops");
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("first_name"));
        assert!(!set.contains_key("email"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_contains_ignore_case_escapes_term() {
        let regex = contains_ignore_case("c++");
        assert_eq!(regex.get_str("$regex").unwrap(), r"c\+\+");
        assert_eq!(regex.get_str("$options").unwrap(), "i");
    }
}

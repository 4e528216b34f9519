use async_graphql::{Context, EmptySubscription, ID, Object, ResultExt, Schema};
use tracing::{debug, info, warn};

use crate::auth;
use crate::error::EmpdeskError;
use crate::model::{EmployeeFields, NewUser};
use crate::storage::Store;
use crate::validation;

use super::types::*;

pub type EmpdeskSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Store) -> EmpdeskSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    ctx.data::<Store>()
}

fn rejected(operation: &'static str) -> impl Fn(&EmpdeskError) {
    move |e| warn!(operation, reason = %e, "Rejected invalid input")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every employee
    async fn get_all_employees(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Employee>> {
        let store = get_store(ctx)?;
        let employees = store.run(store.employees().find_all()).await.extend()?;
        debug!(count = employees.len(), "Listed employees");
        Ok(employees.into_iter().map(Into::into).collect())
    }

    /// Get a single employee by ID, or null if none matches
    async fn get_employee_by_id(
        &self,
        ctx: &Context<'_>,
        eid: ID,
    ) -> async_graphql::Result<Option<Employee>> {
        let store = get_store(ctx)?;
        let employee = store.run(store.employees().find_by_id(&eid)).await.extend()?;
        Ok(employee.map(Into::into))
    }

    /// Case-insensitive search on department or designation
    async fn search_employees(
        &self,
        ctx: &Context<'_>,
        search_term: String,
    ) -> async_graphql::Result<Vec<Employee>> {
        let store = get_store(ctx)?;
        let employees = store
            .run(store.employees().search(&search_term))
            .await
            .extend()?;
        debug!(term = %search_term, count = employees.len(), "Searched employees");
        Ok(employees.into_iter().map(Into::into).collect())
    }

    /// Exact-match filter on department and/or designation
    async fn search_employees_by_dept_or_designation(
        &self,
        ctx: &Context<'_>,
        department: Option<String>,
        designation: Option<String>,
    ) -> async_graphql::Result<Vec<Employee>> {
        let store = get_store(ctx)?;
        let department = non_empty(department);
        let designation = non_empty(designation);
        let employees = store
            .run(
                store
                    .employees()
                    .filter_by_exact_fields(department.as_deref(), designation.as_deref()),
            )
            .await
            .extend()?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    /// Check a username/password pair. Returns a status message, not a token.
    async fn login(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> async_graphql::Result<String> {
        let store = get_store(ctx)?;
        let user = store
            .run(store.users().find_by_username(&username))
            .await
            .extend()?;

        let Some(user) = user else {
            info!(%username, "Login for unknown user");
            return Ok(LOGIN_USER_NOT_FOUND.to_string());
        };

        if !auth::verify_in_background(password, user.password)
            .await
            .extend()?
        {
            info!(%username, "Login with wrong password");
            return Ok(LOGIN_INVALID_PASSWORD.to_string());
        }

        info!(%username, "Login successful");
        Ok(LOGIN_SUCCESS.to_string())
    }
}

pub struct MutationRoot;

#[Object(rename_args = "snake_case")]
impl MutationRoot {
    /// Register a new user account
    async fn signup(
        &self,
        ctx: &Context<'_>,
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> async_graphql::Result<User> {
        let store = get_store(ctx)?;
        validation::validate_signup(username.as_deref(), email.as_deref(), password.as_deref())
            .inspect_err(rejected("signup"))
            .extend()?;

        let password_hash = auth::hash_in_background(password.unwrap_or_default())
            .await
            .extend()?;
        let new_user = NewUser {
            username: username.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password_hash,
        };

        let user = store.run(store.users().insert(new_user)).await.extend()?;
        info!(user_id = %user.id, username = %user.username, "User signed up");
        Ok(user.into())
    }

    /// Add a new employee
    #[allow(clippy::too_many_arguments)]
    async fn add_employee(
        &self,
        ctx: &Context<'_>,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        gender: Option<String>,
        designation: Option<String>,
        salary: Option<f64>,
        date_of_joining: Option<String>,
        department: Option<String>,
        employee_photo: Option<String>,
    ) -> async_graphql::Result<Employee> {
        let store = get_store(ctx)?;
        let fields = EmployeeFields {
            first_name,
            last_name,
            email,
            gender,
            designation,
            salary,
            date_of_joining,
            department,
            employee_photo,
        };
        let new_employee = validation::validate_new_employee(fields)
            .inspect_err(rejected("addEmployee"))
            .extend()?;

        let employee = store
            .run(store.employees().insert(new_employee))
            .await
            .extend()?;
        info!(
            employee_id = %employee.id,
            name = %employee.full_name(),
            department = %employee.department,
            "Employee added"
        );
        Ok(employee.into())
    }

    /// Update the supplied fields of an employee. Returns null if the ID matches nothing.
    #[allow(clippy::too_many_arguments)]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        eid: Option<ID>,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        gender: Option<String>,
        designation: Option<String>,
        salary: Option<f64>,
        date_of_joining: Option<String>,
        department: Option<String>,
        employee_photo: Option<String>,
    ) -> async_graphql::Result<Option<Employee>> {
        let store = get_store(ctx)?;
        let fields = EmployeeFields {
            first_name,
            last_name,
            email,
            gender,
            designation,
            salary,
            date_of_joining,
            department,
            employee_photo,
        };
        let id = validation::validate_employee_update(eid.as_ref().map(|id| id.as_str()), &fields)
            .inspect_err(rejected("updateEmployee"))
            .extend()?;

        let updated = store
            .run(store.employees().update_partial(id, fields))
            .await
            .extend()?;
        match &updated {
            Some(employee) => info!(employee_id = %employee.id, "Employee updated"),
            None => info!(employee_id = %id, "Update for unknown employee"),
        }
        Ok(updated.map(Into::into))
    }

    /// Delete an employee. Returns a status message.
    async fn delete_employee(
        &self,
        ctx: &Context<'_>,
        eid: Option<ID>,
    ) -> async_graphql::Result<String> {
        let store = get_store(ctx)?;
        let id = validation::validate_employee_id(eid.as_ref().map(|id| id.as_str()))
            .inspect_err(rejected("deleteEmployee"))
            .extend()?;

        if store.run(store.employees().delete_by_id(id)).await.extend()? {
            info!(employee_id = %id, "Employee deleted");
            Ok(EMPLOYEE_DELETED.to_string())
        } else {
            info!(employee_id = %id, "Delete for unknown employee");
            Ok(EMPLOYEE_NOT_FOUND.to_string())
        }
    }
}

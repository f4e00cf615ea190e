use garde::Validate;
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, info};

use crate::{Error, Table, error::Result, required, validate};

const ENTITY: &str = "User";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: Date,
}

/// Payload for creating a user or replacing it as whole (then `id` is required).
///
/// Empty or missing `name` defaults to `login`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
pub struct CreateUser {
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(required, inner(custom(validate::email)))]
    pub email: Option<String>,
    #[garde(required, inner(custom(validate::login)))]
    pub login: Option<String>,
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(required, inner(custom(validate::birthday)))]
    pub birthday: Option<Date>,
}

impl CreateUser {
    fn into_user(self, id: i64) -> Result<User> {
        let login = required(self.login, "login")?;
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                info!(%login, "User name not provided, using login");
                login.clone()
            }
        };
        Ok(User {
            id,
            email: required(self.email, "email")?,
            login,
            name,
            birthday: required(self.birthday, "birthday")?,
        })
    }
}

/// Partial update, only fields which are present are changed.
///
/// Empty `name` resets name to the login.
#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
pub struct PatchUser {
    #[garde(skip)]
    pub id: Option<i64>,
    #[garde(inner(custom(validate::email)))]
    pub email: Option<String>,
    #[garde(inner(custom(validate::login)))]
    pub login: Option<String>,
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(inner(custom(validate::birthday)))]
    pub birthday: Option<Date>,
}

impl PatchUser {
    fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(login) = self.login {
            user.login = login;
        }
        if let Some(birthday) = self.birthday {
            user.birthday = birthday;
        }
        // after login, so that reset picks up the new one
        match self.name {
            Some(name) if name.is_empty() => {
                info!(id = user.id, "User name cleared, using login");
                user.name = user.login.clone();
            }
            Some(name) => user.name = name,
            None => (),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    table: Table<User>,
}

impl UserRepository {
    pub fn new(table: Table<User>) -> Self {
        Self { table }
    }

    pub fn create(&self, payload: CreateUser) -> Result<User> {
        payload
            .validate()
            .inspect_err(|e| debug!("Invalid user on create: {e}"))?;
        let user = payload.into_user(0)?;
        let user = self.table.insert_with(|id| User { id, ..user });
        debug!(id = user.id, "User created");
        Ok(user)
    }

    pub fn replace(&self, payload: CreateUser) -> Result<User> {
        let id = self.existing_id(payload.id)?;
        payload
            .validate()
            .inspect_err(|e| debug!(id, "Invalid user on replace: {e}"))?;
        let new_user = payload.into_user(id)?;
        let user = self
            .table
            .update(id, |user| *user = new_user)
            .ok_or(Error::RecordNotFound { entity: ENTITY, id })?;
        debug!(id, "User replaced");
        Ok(user)
    }

    pub fn patch(&self, payload: PatchUser) -> Result<User> {
        let id = self.existing_id(payload.id)?;
        payload
            .validate()
            .inspect_err(|e| debug!(id, "Invalid user on patch: {e}"))?;
        let user = self
            .table
            .update(id, |user| payload.apply(user))
            .ok_or(Error::RecordNotFound { entity: ENTITY, id })?;
        debug!(id, "User patched");
        Ok(user)
    }

    pub fn list_all(&self) -> Vec<User> {
        self.table.list()
    }

    fn existing_id(&self, id: Option<i64>) -> Result<i64> {
        let id = id.ok_or_else(|| {
            debug!("User id not provided");
            Error::MissingId
        })?;
        if !self.table.contains(id) {
            debug!(id, "User not found");
            return Err(Error::RecordNotFound { entity: ENTITY, id });
        }
        Ok(id)
    }
}

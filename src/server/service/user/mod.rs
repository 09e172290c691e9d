//! User directory.
//!
//! Owns account creation, credential validation, role lookup and account deletion. Deleting an
//! account releases every reservation it holds in the same transaction so no seat is leaked.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::{reservation::release_all_for_user, retry::RetryContext},
        util::password::{hash_password, verify_password},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with the provided role
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created account
    /// - `Err(AuthError::EmptyCredential)` - Username or password is blank
    /// - `Err(AuthError::AlreadyExists)` - Username is taken
    pub async fn create_identity(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<UserModel, Error> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredential.into());
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_name(username).await?.is_some() {
            return Err(AuthError::AlreadyExists(username.to_string()).into());
        }

        let password_hash = hash_blocking(password.to_string()).await?;

        // The unique index on name catches a registration racing this one
        match user_repo
            .create(username, &password_hash, role.into())
            .await
        {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Created user {:?} with role {:?}", username, role);

                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AuthError::AlreadyExists(username.to_string()).into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Whether the username exists and the password matches its stored hash
    ///
    /// Unknown usernames and wrong passwords are both `Ok(false)`, not errors.
    pub async fn validate(&self, username: &str, password: &str) -> Result<bool, Error> {
        Ok(self.authenticate(username, password).await?.is_some())
    }

    /// Returns the account if the credentials are valid
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserModel>, Error> {
        let Some(user) = UserRepository::new(self.db)
            .get_by_name(username.trim())
            .await?
        else {
            return Ok(None);
        };

        if !verify_blocking(password.to_string(), user.password_hash.clone()).await? {
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub async fn role_of(&self, username: &str) -> Result<Role, Error> {
        Ok(self.get_by_name(username).await?.role.into())
    }

    pub async fn id_of(&self, username: &str) -> Result<i32, Error> {
        Ok(self.get_by_name(username).await?.id)
    }

    /// Self-service deletion, requires the account's password
    ///
    /// # Returns
    /// - `Ok(())` - Account and its reservations deleted
    /// - `Err(AuthError::UserNotFound)` - No account with this username
    /// - `Err(AuthError::InvalidCredential)` - Password does not match
    pub async fn delete_identity(&self, username: &str, password: &str) -> Result<(), Error> {
        let user = self.get_by_name(username).await?;

        if !verify_blocking(password.to_string(), user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredential.into());
        }

        self.delete_identity_by_id(user.id).await
    }

    /// Administrative deletion by account ID
    ///
    /// # Returns
    /// - `Ok(())` - Account and its reservations deleted
    /// - `Err(AuthError::UserIdNotFound)` - No account with this ID
    pub async fn delete_identity_by_id(&self, user_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                let released = release_all_for_user(&txn, user_id).await?;

                let deleted = UserRepository::new(&txn).delete(user_id).await?;
                if deleted.rows_affected == 0 {
                    return Err(AuthError::UserIdNotFound(user_id).into());
                }

                txn.commit().await?;

                tracing::info!(user_id, released, "Deleted user");

                Ok(())
            })
        })
        .await
    }

    /// Creates the configured administrator account if the name is still free
    ///
    /// Returns `None` when an account with that name already exists, whatever its role.
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserModel>, Error> {
        match self.create_identity(username, password, Role::Admin).await {
            Ok(user) => Ok(Some(user)),
            Err(Error::AuthError(AuthError::AlreadyExists(_))) => {
                tracing::debug!("Administrator {:?} already exists, skipping bootstrap", username);

                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn get_by_name(&self, username: &str) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_name(username.trim())
            .await?
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()).into())
    }
}

// Argon2 blocks for tens of milliseconds, run it on the blocking pool
async fn hash_blocking(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
}

async fn verify_blocking(password: String, hash: String) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))?
}

//! Registration & login.

pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::{
            auth::token::{IssuedToken, TokenService},
            user::UserService,
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Self-registration always creates a regular user, administrators are bootstrapped from
    /// configuration.
    pub async fn register(&self, username: &str, password: &str) -> Result<UserModel, Error> {
        UserService::new(self.db)
            .create_identity(username, password, Role::User)
            .await
    }

    /// Validates credentials and issues a token for the account
    ///
    /// # Returns
    /// - `Ok((UserModel, IssuedToken))` - Credentials valid
    /// - `Err(AuthError::InvalidCredential)` - Unknown username or wrong password
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(UserModel, IssuedToken), Error> {
        let Some(user) = UserService::new(self.db)
            .authenticate(username, password)
            .await?
        else {
            return Err(AuthError::InvalidCredential.into());
        };

        let issued = self.tokens.issue(user.id, &user.name, user.role.into())?;

        tracing::debug!(user_id = user.id, "Issued token for user {:?}", user.name);

        Ok((user, issued))
    }
}

#[cfg(test)]
mod tests {

    mod login {
        use std::time::Duration;

        use marquee_test_utils::prelude::*;

        use crate::{
            model::user::Role,
            server::{
                error::{auth::AuthError, Error},
                service::auth::{token::TokenService, AuthService},
            },
        };

        /// Expect a token carrying the user's identity & role
        #[tokio::test]
        async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::MarqueeUser)?;
            let tokens = TokenService::new(&test.state.jwt_secret, Duration::from_secs(3600));

            let auth_service = AuthService::new(&test.state.db, &tokens);
            let registered = auth_service.register("alice", "hunter22").await.unwrap();
            let (user, issued) = auth_service.login("alice", "hunter22").await.unwrap();

            assert_eq!(user.id, registered.id);
            let claims = tokens.verify(&issued.token).unwrap();
            assert_eq!(claims.user_id, registered.id);
            assert_eq!(claims.username, "alice");
            assert_eq!(claims.role, Role::User);

            Ok(())
        }

        /// Expect InvalidCredential for a wrong password or unknown user
        #[tokio::test]
        async fn fails_for_invalid_credentials() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::MarqueeUser)?;
            let tokens = TokenService::new(&test.state.jwt_secret, Duration::from_secs(3600));

            let auth_service = AuthService::new(&test.state.db, &tokens);
            auth_service.register("alice", "hunter22").await.unwrap();

            assert!(matches!(
                auth_service.login("alice", "hunter23").await,
                Err(Error::AuthError(AuthError::InvalidCredential))
            ));
            assert!(matches!(
                auth_service.login("bob", "hunter22").await,
                Err(Error::AuthError(AuthError::InvalidCredential))
            ));

            Ok(())
        }
    }
}

use entity::marquee_user::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestSetup};

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Insert a regular user with a placeholder password hash
    pub async fn insert_user(&self, name: &str) -> Result<entity::marquee_user::Model, TestError> {
        self.insert_with_role(name, UserRole::User).await
    }

    /// Insert an administrator with a placeholder password hash
    pub async fn insert_admin(&self, name: &str) -> Result<entity::marquee_user::Model, TestError> {
        self.insert_with_role(name, UserRole::Admin).await
    }

    async fn insert_with_role(
        &self,
        name: &str,
        role: UserRole,
    ) -> Result<entity::marquee_user::Model, TestError> {
        Ok(
            entity::prelude::MarqueeUser::insert(entity::marquee_user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                role: ActiveValue::Set(role),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

use entity::marquee_user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already hashed password
    pub async fn create(
        &self,
        name: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<entity::marquee_user::Model, DbErr> {
        let user = entity::marquee_user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::marquee_user::Model>, DbErr> {
        entity::prelude::MarqueeUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::marquee_user::Model>, DbErr> {
        entity::prelude::MarqueeUser::find()
            .filter(entity::marquee_user::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MarqueeUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

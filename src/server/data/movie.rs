use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct MovieRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MovieRepository<'a, C> {
    /// Creates a new instance of [`MovieRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
    ) -> Result<entity::movie::Model, DbErr> {
        let movie = entity::movie::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        };

        movie.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::movie::Model>, DbErr> {
        entity::prelude::Movie::find()
            .order_by_asc(entity::movie::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, movie_id: i32) -> Result<Option<entity::movie::Model>, DbErr> {
        entity::prelude::Movie::find_by_id(movie_id).one(self.db).await
    }

    pub async fn get_by_title(&self, title: &str) -> Result<Option<entity::movie::Model>, DbErr> {
        entity::prelude::Movie::find()
            .filter(entity::movie::Column::Title.eq(title))
            .one(self.db)
            .await
    }

    /// Replaces title & description of a movie
    ///
    /// Returns `None` if the movie does not exist.
    pub async fn update(
        &self,
        movie_id: i32,
        title: &str,
        description: &str,
    ) -> Result<Option<entity::movie::Model>, DbErr> {
        let Some(movie) = entity::prelude::Movie::find_by_id(movie_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut movie_am = movie.into_active_model();
        movie_am.title = ActiveValue::Set(title.to_string());
        movie_am.description = ActiveValue::Set(description.to_string());

        let movie = movie_am.update(self.db).await?;

        Ok(Some(movie))
    }

    /// Deletes a movie
    ///
    /// Returns OK regardless of movie existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, movie_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Movie::delete_by_id(movie_id)
            .exec(self.db)
            .await
    }
}

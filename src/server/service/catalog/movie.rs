use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{movie::MovieRepository, showtime::ShowtimeRepository},
    error::{catalog::CatalogError, Error},
    model::db::MovieModel,
    service::catalog::in_use_on_fk_violation,
};

pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieService<'a> {
    /// Creates a new instance of [`MovieService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<MovieModel>, Error> {
        Ok(MovieRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, movie_id: i32) -> Result<MovieModel, Error> {
        MovieRepository::new(self.db)
            .get_by_id(movie_id)
            .await?
            .ok_or_else(|| CatalogError::MovieNotFound(movie_id).into())
    }

    pub async fn get_by_title(&self, title: &str) -> Result<MovieModel, Error> {
        MovieRepository::new(self.db)
            .get_by_title(title)
            .await?
            .ok_or_else(|| CatalogError::MovieTitleNotFound(title.to_string()).into())
    }

    /// Creates a movie
    ///
    /// # Returns
    /// - `Ok(MovieModel)` - The created movie
    /// - `Err(CatalogError::BadRequest)` - Title is blank
    /// - `Err(CatalogError::MovieTitleTaken)` - Title already used by another movie
    pub async fn create(&self, title: &str, description: &str) -> Result<MovieModel, Error> {
        let title = validate_title(title)?;
        let movie_repo = MovieRepository::new(self.db);

        if movie_repo.get_by_title(title).await?.is_some() {
            return Err(CatalogError::MovieTitleTaken(title.to_string()).into());
        }

        let movie = movie_repo
            .create(title, description)
            .await
            .map_err(|err| title_taken_on_unique_violation(err, title))?;

        tracing::info!(movie_id = movie.id, "Created movie {:?}", movie.title);

        Ok(movie)
    }

    /// Replaces a movie's title & description, a rename must not collide with another movie
    pub async fn update(
        &self,
        movie_id: i32,
        title: &str,
        description: &str,
    ) -> Result<MovieModel, Error> {
        let title = validate_title(title)?;
        let movie_repo = MovieRepository::new(self.db);

        if let Some(existing) = movie_repo.get_by_title(title).await? {
            if existing.id != movie_id {
                return Err(CatalogError::MovieTitleTaken(title.to_string()).into());
            }
        }

        movie_repo
            .update(movie_id, title, description)
            .await
            .map_err(|err| title_taken_on_unique_violation(err, title))?
            .ok_or_else(|| CatalogError::MovieNotFound(movie_id).into())
    }

    /// Deletes a movie that has no showtimes
    pub async fn delete(&self, movie_id: i32) -> Result<(), Error> {
        let movie_repo = MovieRepository::new(self.db);

        if movie_repo.get_by_id(movie_id).await?.is_none() {
            return Err(CatalogError::MovieNotFound(movie_id).into());
        }

        let showtimes = ShowtimeRepository::new(self.db)
            .count_by_movie_id(movie_id)
            .await?;
        if showtimes > 0 {
            return Err(CatalogError::InUse(format!(
                "Movie ID {} with {} showtime(s)",
                movie_id, showtimes
            ))
            .into());
        }

        movie_repo
            .delete(movie_id)
            .await
            .map_err(|err| in_use_on_fk_violation(err, format!("Movie ID {}", movie_id)))?;

        tracing::info!(movie_id, "Deleted movie");

        Ok(())
    }
}

fn validate_title(title: &str) -> Result<&str, CatalogError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(CatalogError::BadRequest("Movie title must not be empty".to_string()));
    }

    Ok(title)
}

fn title_taken_on_unique_violation(err: sea_orm::DbErr, title: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CatalogError::MovieTitleTaken(title.to_string()).into()
        }
        _ => err.into(),
    }
}

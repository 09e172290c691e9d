use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::UpdateShowtimeDto,
    server::{
        data::{
            hall::HallRepository, movie::MovieRepository, reservation::ReservationRepository,
            showtime::ShowtimeRepository,
        },
        error::{catalog::CatalogError, Error},
        model::db::ShowtimeModel,
        service::catalog::in_use_on_fk_violation,
    },
};

pub struct ShowtimeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowtimeService<'a> {
    /// Creates a new instance of [`ShowtimeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<ShowtimeModel>, Error> {
        Ok(ShowtimeRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, showtime_id: i32) -> Result<ShowtimeModel, Error> {
        ShowtimeRepository::new(self.db)
            .get_by_id(showtime_id)
            .await?
            .ok_or_else(|| CatalogError::ShowtimeNotFound(showtime_id).into())
    }

    /// Seats a showtime can sell, the `seat_count` of its hall
    pub async fn capacity(&self, showtime_id: i32) -> Result<i32, Error> {
        let Some((showtime, hall)) = ShowtimeRepository::new(self.db)
            .get_with_hall(showtime_id)
            .await?
        else {
            return Err(CatalogError::ShowtimeNotFound(showtime_id).into());
        };

        hall.map(|hall| hall.seat_count).ok_or_else(|| {
            Error::InternalError(format!(
                "Hall ID {} of showtime ID {} does not exist",
                showtime.hall_id, showtime.id
            ))
        })
    }

    /// Showtimes of a movie ordered by start time
    pub async fn list_by_movie(&self, movie_id: i32) -> Result<Vec<ShowtimeModel>, Error> {
        if MovieRepository::new(self.db)
            .get_by_id(movie_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::MovieNotFound(movie_id).into());
        }

        Ok(ShowtimeRepository::new(self.db)
            .get_by_movie_id(movie_id)
            .await?)
    }

    /// Schedules a movie in a hall, starting with every seat available
    pub async fn create(
        &self,
        movie_id: i32,
        hall_id: i32,
        start_at: DateTime<Utc>,
    ) -> Result<ShowtimeModel, Error> {
        if MovieRepository::new(self.db)
            .get_by_id(movie_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::MovieNotFound(movie_id).into());
        }
        if HallRepository::new(self.db)
            .get_by_id(hall_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::HallNotFound(hall_id).into());
        }

        let showtime = ShowtimeRepository::new(self.db)
            .create(movie_id, hall_id, start_at)
            .await?;

        tracing::info!(
            showtime_id = showtime.id,
            movie_id,
            hall_id,
            "Scheduled showtime at {}",
            showtime.start_at
        );

        Ok(showtime)
    }

    /// Changes the start time and/or hall of a showtime
    ///
    /// # Returns
    /// - `Ok(ShowtimeModel)` - The updated showtime
    /// - `Err(CatalogError::BadRequest)` - Neither field was provided
    /// - `Err(CatalogError::ShowtimeNotFound)` - Showtime does not exist
    /// - `Err(CatalogError::HallNotFound)` - Target hall does not exist
    /// - `Err(CatalogError::CapacityBelowReserved)` - Target hall is smaller than the seats sold
    pub async fn update(
        &self,
        showtime_id: i32,
        update: &UpdateShowtimeDto,
    ) -> Result<ShowtimeModel, Error> {
        if update.start_at.is_none() && update.hall_id.is_none() {
            return Err(CatalogError::BadRequest(
                "Provide a new start_at and/or hall_id".to_string(),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let showtime_repo = ShowtimeRepository::new(&txn);

        let Some(showtime) = showtime_repo.get_by_id(showtime_id).await? else {
            return Err(CatalogError::ShowtimeNotFound(showtime_id).into());
        };

        if let Some(hall_id) = update.hall_id {
            // Held until commit so the target hall cannot shrink under the move
            let Some(hall) = HallRepository::new(&txn).get_for_update(hall_id).await? else {
                return Err(CatalogError::HallNotFound(hall_id).into());
            };

            if !showtime_repo.move_to_hall(showtime_id, hall_id).await? {
                return Err(CatalogError::CapacityBelowReserved {
                    capacity: hall.seat_count,
                    reserved: showtime.reserved_seats,
                }
                .into());
            }
        }

        let showtime = match update.start_at {
            Some(start_at) => {
                showtime_repo
                    .update(showtime_id, Some(start_at), None)
                    .await?
            }
            None => showtime_repo.get_by_id(showtime_id).await?,
        }
        .ok_or(CatalogError::ShowtimeNotFound(showtime_id))?;

        txn.commit().await?;

        Ok(showtime)
    }

    /// Deletes a showtime nobody holds a reservation for
    pub async fn delete(&self, showtime_id: i32) -> Result<(), Error> {
        let showtime_repo = ShowtimeRepository::new(self.db);

        if showtime_repo.get_by_id(showtime_id).await?.is_none() {
            return Err(CatalogError::ShowtimeNotFound(showtime_id).into());
        }

        let reservations = ReservationRepository::new(self.db)
            .count_by_showtime_id(showtime_id)
            .await?;
        if reservations > 0 {
            return Err(CatalogError::InUse(format!(
                "Showtime ID {} with {} reservation(s)",
                showtime_id, reservations
            ))
            .into());
        }

        showtime_repo
            .delete(showtime_id)
            .await
            .map_err(|err| in_use_on_fk_violation(err, format!("Showtime ID {}", showtime_id)))?;

        tracing::info!(showtime_id, "Deleted showtime");

        Ok(())
    }
}

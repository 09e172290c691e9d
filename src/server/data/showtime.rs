use chrono::{DateTime, Utc};
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

pub struct ShowtimeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShowtimeRepository<'a, C> {
    /// Creates a new instance of [`ShowtimeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a showtime with no seats reserved
    pub async fn create(
        &self,
        movie_id: i32,
        hall_id: i32,
        start_at: DateTime<Utc>,
    ) -> Result<entity::showtime::Model, DbErr> {
        let showtime = entity::showtime::ActiveModel {
            movie_id: ActiveValue::Set(movie_id),
            hall_id: ActiveValue::Set(hall_id),
            start_at: ActiveValue::Set(start_at),
            reserved_seats: ActiveValue::Set(0),
            ..Default::default()
        };

        showtime.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::showtime::Model>, DbErr> {
        entity::prelude::Showtime::find()
            .order_by_asc(entity::showtime::Column::StartAt)
            .order_by_asc(entity::showtime::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        showtime_id: i32,
    ) -> Result<Option<entity::showtime::Model>, DbErr> {
        entity::prelude::Showtime::find_by_id(showtime_id)
            .one(self.db)
            .await
    }

    /// Get a showtime together with the hall that determines its capacity
    pub async fn get_with_hall(
        &self,
        showtime_id: i32,
    ) -> Result<Option<(entity::showtime::Model, Option<entity::hall::Model>)>, DbErr> {
        entity::prelude::Showtime::find_by_id(showtime_id)
            .find_also_related(entity::prelude::Hall)
            .one(self.db)
            .await
    }

    pub async fn get_by_movie_id(
        &self,
        movie_id: i32,
    ) -> Result<Vec<entity::showtime::Model>, DbErr> {
        entity::prelude::Showtime::find()
            .filter(entity::showtime::Column::MovieId.eq(movie_id))
            .order_by_asc(entity::showtime::Column::StartAt)
            .order_by_asc(entity::showtime::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_movie_id(&self, movie_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Showtime::find()
            .filter(entity::showtime::Column::MovieId.eq(movie_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_hall_id(&self, hall_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Showtime::find()
            .filter(entity::showtime::Column::HallId.eq(hall_id))
            .count(self.db)
            .await
    }

    /// Highest reserved seat count among the showtimes scheduled in a hall
    ///
    /// Every showtime of the hall is selected `FOR UPDATE`, so no seat can be claimed in the hall
    /// until the surrounding transaction ends. Returns `None` when the hall has no showtimes.
    pub async fn max_reserved_for_hall(&self, hall_id: i32) -> Result<Option<i32>, DbErr> {
        let showtimes = entity::prelude::Showtime::find()
            .filter(entity::showtime::Column::HallId.eq(hall_id))
            .lock_exclusive()
            .all(self.db)
            .await?;

        Ok(showtimes
            .iter()
            .map(|showtime| showtime.reserved_seats)
            .max())
    }

    /// Update start time and/or hall, leaving unset fields untouched
    ///
    /// Returns `None` if the showtime does not exist.
    pub async fn update(
        &self,
        showtime_id: i32,
        start_at: Option<DateTime<Utc>>,
        hall_id: Option<i32>,
    ) -> Result<Option<entity::showtime::Model>, DbErr> {
        let Some(showtime) = entity::prelude::Showtime::find_by_id(showtime_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut showtime_am = showtime.into_active_model();
        if let Some(start_at) = start_at {
            showtime_am.start_at = ActiveValue::Set(start_at);
        }
        if let Some(hall_id) = hall_id {
            showtime_am.hall_id = ActiveValue::Set(hall_id);
        }

        let showtime = showtime_am.update(self.db).await?;

        Ok(Some(showtime))
    }

    /// Move a showtime to another hall if its reserved seats fit in that hall
    ///
    /// The target hall's `seat_count` is read by the same statement that moves the showtime.
    ///
    /// # Returns
    /// - `Ok(true)` - The showtime now belongs to `hall_id`
    /// - `Ok(false)` - Too many seats are reserved, or the showtime or hall does not exist
    pub async fn move_to_hall(&self, showtime_id: i32, hall_id: i32) -> Result<bool, DbErr> {
        let target_fits = entity::prelude::Hall::find()
            .select_only()
            .column(entity::hall::Column::Id)
            .filter(entity::hall::Column::Id.eq(hall_id))
            .filter(
                Expr::col((entity::hall::Entity, entity::hall::Column::SeatCount)).gte(Expr::col(
                    (entity::showtime::Entity, entity::showtime::Column::ReservedSeats),
                )),
            )
            .into_query();

        let result = entity::prelude::Showtime::update_many()
            .col_expr(entity::showtime::Column::HallId, Expr::value(hall_id))
            .filter(entity::showtime::Column::Id.eq(showtime_id))
            .filter(Expr::exists(target_fits))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a showtime
    ///
    /// Returns OK regardless of showtime existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, showtime_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Showtime::delete_by_id(showtime_id)
            .exec(self.db)
            .await
    }

    /// Write-lock a showtime row for the rest of the transaction
    ///
    /// Rewrites the seat counter with its own value. Statements issued after this one see every
    /// change committed while it waited for the lock.
    ///
    /// # Returns
    /// - `Ok(true)` - The row is locked
    /// - `Ok(false)` - The showtime does not exist
    pub async fn lock(&self, showtime_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Showtime::update_many()
            .col_expr(
                entity::showtime::Column::ReservedSeats,
                Expr::col(entity::showtime::Column::ReservedSeats),
            )
            .filter(entity::showtime::Column::Id.eq(showtime_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Atomically take one seat if fewer than the hall's `seat_count` are reserved
    ///
    /// Executes `reserved_seats = reserved_seats + 1 WHERE reserved_seats < hall.seat_count` as a
    /// single statement, reading the capacity of the hall the showtime belongs to at that moment.
    /// The check and the increment cannot interleave with another writer.
    ///
    /// # Returns
    /// - `Ok(true)` - A seat was claimed
    /// - `Ok(false)` - The showtime is full or does not exist
    pub async fn try_claim_seat(&self, showtime_id: i32) -> Result<bool, DbErr> {
        let seat_left = entity::prelude::Hall::find()
            .select_only()
            .column(entity::hall::Column::Id)
            .filter(
                Expr::col((entity::hall::Entity, entity::hall::Column::Id)).equals((
                    entity::showtime::Entity,
                    entity::showtime::Column::HallId,
                )),
            )
            .filter(
                Expr::col((entity::hall::Entity, entity::hall::Column::SeatCount)).gt(Expr::col(
                    (entity::showtime::Entity, entity::showtime::Column::ReservedSeats),
                )),
            )
            .into_query();

        let result = entity::prelude::Showtime::update_many()
            .col_expr(
                entity::showtime::Column::ReservedSeats,
                Expr::col(entity::showtime::Column::ReservedSeats).add(1),
            )
            .filter(entity::showtime::Column::Id.eq(showtime_id))
            .filter(Expr::exists(seat_left))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Atomically give back one seat, never going below zero
    ///
    /// # Returns
    /// - `Ok(true)` - A seat was released
    /// - `Ok(false)` - Nothing was reserved or the showtime does not exist
    pub async fn release_seat(&self, showtime_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Showtime::update_many()
            .col_expr(
                entity::showtime::Column::ReservedSeats,
                Expr::col(entity::showtime::Column::ReservedSeats).sub(1),
            )
            .filter(entity::showtime::Column::Id.eq(showtime_id))
            .filter(entity::showtime::Column::ReservedSeats.gt(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

//! Reservation admission engine.
//!
//! Every seat a showtime can sell is accounted for by the `reserved_seats` counter on the
//! showtime row. A reservation is only inserted after the counter has been incremented by a
//! conditional update that compares it with the current `seat_count` of the showtime's hall, and a
//! reservation is only removed together with the matching decrement. Both happen inside one transaction, so the
//! counter always equals the number of reservation rows and can never exceed capacity, however
//! many requests race for the last seat.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::catalog::AvailabilityDto,
    server::{
        data::{
            reservation::ReservationRepository, showtime::ShowtimeRepository,
            user::UserRepository,
        },
        error::{reservation::ReservationError, Error},
        model::db::{ReservationModel, ShowtimeModel},
        service::retry::RetryContext,
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    /// Creates a new instance of [`ReservationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Claims one ticket of a showtime for a user.
    ///
    /// Checks run in this order inside a single transaction: the showtime must exist, a seat must
    /// be claimable, and the user must not already hold a reservation for the showtime. Any
    /// failure rolls the transaction back, leaving the seat counter untouched. Transient database
    /// faults are retried once before being surfaced.
    ///
    /// # Returns
    /// - `Ok(ReservationModel)` - The newly created reservation
    /// - `Err(ReservationError::ShowtimeNotFound)` - Showtime does not exist
    /// - `Err(ReservationError::NoTicketsAvailable)` - Showtime is sold out
    /// - `Err(ReservationError::AlreadyReserved)` - User already holds a reservation for it
    /// - `Err(ReservationError::UserNotFound)` - User does not exist
    /// - `Err(Error::DbErr)` - Database failure after retries
    pub async fn reserve(&self, user_id: i32, showtime_id: i32) -> Result<ReservationModel, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("reserve showtime ID {} for user ID {}", showtime_id, user_id),
            || {
                let db = db.clone();

                Box::pin(async move { admit(&db, user_id, showtime_id).await })
            },
        )
        .await
    }

    /// Cancels a reservation and returns its seat to the showtime.
    ///
    /// Ownership is not checked here, callers must verify the requester may cancel it.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted and seat released
    /// - `Err(ReservationError::NotFound)` - Reservation does not exist (or was cancelled concurrently)
    /// - `Err(Error::DbErr)` - Database failure after retries
    pub async fn cancel(&self, reservation_id: i32) -> Result<(), Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("cancel reservation ID {}", reservation_id), || {
            let db = db.clone();

            Box::pin(async move {
                // Reservation rows are never updated, the showtime read here stays valid
                let reservation = ReservationRepository::new(&db)
                    .get_by_id(reservation_id)
                    .await?
                    .ok_or(ReservationError::NotFound(reservation_id))?;

                let txn = db.begin().await?;

                if !remove_reservation(&txn, &reservation).await? {
                    return Err(ReservationError::NotFound(reservation_id).into());
                }

                txn.commit().await?;

                tracing::info!(
                    reservation_id = reservation.id,
                    user_id = reservation.user_id,
                    showtime_id = reservation.showtime_id,
                    "Reservation cancelled"
                );

                Ok(())
            })
        })
        .await
    }

    /// Capacity of a showtime and the number of tickets still available.
    ///
    /// Read without locking, the value is advisory and may be stale by the time it is used.
    pub async fn remaining_tickets(&self, showtime_id: i32) -> Result<AvailabilityDto, Error> {
        let showtime_repo = ShowtimeRepository::new(self.db);

        let Some((showtime, hall)) = showtime_repo.get_with_hall(showtime_id).await? else {
            return Err(ReservationError::ShowtimeNotFound(showtime_id).into());
        };
        let capacity = hall.ok_or_else(|| missing_hall(&showtime))?.seat_count;

        Ok(AvailabilityDto {
            showtime_id,
            capacity,
            remaining_tickets: (capacity - showtime.reserved_seats).max(0),
        })
    }

    pub async fn get_by_id(&self, reservation_id: i32) -> Result<ReservationModel, Error> {
        ReservationRepository::new(self.db)
            .get_by_id(reservation_id)
            .await?
            .ok_or_else(|| ReservationError::NotFound(reservation_id).into())
    }

    pub async fn reservations_of(&self, user_id: i32) -> Result<Vec<ReservationModel>, Error> {
        Ok(ReservationRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?)
    }
}

/// Cancels every reservation a user holds, restoring each showtime's counter.
///
/// Runs on the caller's connection so it can share the transaction that deletes the user.
///
/// # Returns
/// - `Ok(u64)` - Number of reservations released
pub async fn release_all_for_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<u64, Error> {
    let reservations = ReservationRepository::new(conn)
        .get_by_user_id(user_id)
        .await?;

    let mut released = 0;
    for reservation in &reservations {
        if remove_reservation(conn, reservation).await? {
            released += 1;
        }
    }

    if released > 0 {
        tracing::info!(user_id, released, "Released reservations of deleted user");
    }

    Ok(released)
}

/// One attempt at admitting a user to a showtime, in its own transaction
async fn admit(
    db: &DatabaseConnection,
    user_id: i32,
    showtime_id: i32,
) -> Result<ReservationModel, Error> {
    let txn = db.begin().await?;
    let showtime_repo = ShowtimeRepository::new(&txn);
    let reservation_repo = ReservationRepository::new(&txn);

    // Serializes admissions for this showtime until commit
    if !showtime_repo.lock(showtime_id).await? {
        return Err(ReservationError::ShowtimeNotFound(showtime_id).into());
    }

    if !showtime_repo.try_claim_seat(showtime_id).await? {
        if showtime_repo.get_by_id(showtime_id).await?.is_none() {
            return Err(ReservationError::ShowtimeNotFound(showtime_id).into());
        }

        return Err(ReservationError::NoTicketsAvailable(showtime_id).into());
    }

    if reservation_repo
        .get_by_user_and_showtime(user_id, showtime_id)
        .await?
        .is_some()
    {
        return Err(ReservationError::AlreadyReserved {
            user_id,
            showtime_id,
        }
        .into());
    }

    let reservation = match reservation_repo.create(showtime_id, user_id).await {
        Ok(reservation) => reservation,
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                return Err(ReservationError::AlreadyReserved {
                    user_id,
                    showtime_id,
                }
                .into())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                txn.rollback().await?;

                return Err(missing_reference(db, user_id, showtime_id).await);
            }
            _ => return Err(err.into()),
        },
    };

    txn.commit().await?;

    tracing::info!(
        reservation_id = reservation.id,
        user_id,
        showtime_id,
        "Reservation created"
    );

    Ok(reservation)
}

/// Deletes a reservation and releases its seat only if the row was actually removed
async fn remove_reservation<C: ConnectionTrait>(
    conn: &C,
    reservation: &ReservationModel,
) -> Result<bool, Error> {
    let deleted = ReservationRepository::new(conn)
        .delete(reservation.id)
        .await?;

    if deleted.rows_affected == 0 {
        return Ok(false);
    }

    if !ShowtimeRepository::new(conn)
        .release_seat(reservation.showtime_id)
        .await?
    {
        tracing::warn!(
            showtime_id = reservation.showtime_id,
            "Seat counter was already zero while releasing reservation ID {}",
            reservation.id
        );
    }

    Ok(true)
}

/// Names the row a rejected reservation insert referenced but could not find
async fn missing_reference(db: &DatabaseConnection, user_id: i32, showtime_id: i32) -> Error {
    match UserRepository::new(db).get_by_id(user_id).await {
        Ok(None) => return ReservationError::UserNotFound(user_id).into(),
        Ok(Some(_)) => {}
        Err(err) => return err.into(),
    }

    match ShowtimeRepository::new(db).get_by_id(showtime_id).await {
        Ok(None) => ReservationError::ShowtimeNotFound(showtime_id).into(),
        Ok(Some(_)) => Error::InternalError(format!(
            "Reservation of showtime ID {} by user ID {} violated a foreign key although both exist",
            showtime_id, user_id
        )),
        Err(err) => err.into(),
    }
}

// Would only occur if the foreign key from showtime to hall is not enforced
fn missing_hall(showtime: &ShowtimeModel) -> Error {
    Error::InternalError(format!(
        "Failed to find hall ID {} for showtime ID {}",
        showtime.hall_id, showtime.id
    ))
}

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn reservation(&self) -> ReservationFixtures<'_> {
        ReservationFixtures { setup: self }
    }
}

pub struct ReservationFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ReservationFixtures<'a> {
    /// Insert a reservation and count its seat on the showtime
    ///
    /// Bypasses the capacity check, so tests can arrange any reserved count.
    pub async fn insert_reservation(
        &self,
        showtime_id: i32,
        user_id: i32,
    ) -> Result<entity::reservation::Model, TestError> {
        let db = &self.setup.state.db;

        let reservation = entity::prelude::Reservation::insert(entity::reservation::ActiveModel {
            showtime_id: ActiveValue::Set(showtime_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(db)
        .await?;

        let showtime = entity::prelude::Showtime::find_by_id(showtime_id)
            .one(db)
            .await?
            .ok_or(TestError::Missing("showtime"))?;

        entity::prelude::Showtime::update(entity::showtime::ActiveModel {
            id: ActiveValue::Unchanged(showtime.id),
            reserved_seats: ActiveValue::Set(showtime.reserved_seats + 1),
            ..Default::default()
        })
        .exec(db)
        .await?;

        Ok(reservation)
    }
}

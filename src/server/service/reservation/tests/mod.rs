
use marquee_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::server::{
    error::{reservation::ReservationError, Error},
    service::reservation::ReservationService,
};

/// Current value of a showtime's seat counter
async fn reserved_seats(test: &TestSetup, showtime_id: i32) -> Result<i32, TestError> {
    let showtime = entity::prelude::Showtime::find_by_id(showtime_id)
        .one(&test.state.db)
        .await?
        .ok_or(TestError::Missing("showtime"))?;

    Ok(showtime.reserved_seats)
}

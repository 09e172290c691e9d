use chrono::{Duration, SubsecRound, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_movie(&self, title: &str) -> Result<entity::movie::Model, TestError> {
        Ok(
            entity::prelude::Movie::insert(entity::movie::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(String::new()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a hall laid out as a single row of `seat_count` seats
    pub async fn insert_hall(
        &self,
        name: &str,
        seat_count: i32,
    ) -> Result<entity::hall::Model, TestError> {
        Ok(
            entity::prelude::Hall::insert(entity::hall::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                seat_count: ActiveValue::Set(seat_count),
                rows: ActiveValue::Set(1),
                cols: ActiveValue::Set(seat_count.max(1)),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a showtime starting tomorrow with no seats reserved
    pub async fn insert_showtime(
        &self,
        movie_id: i32,
        hall_id: i32,
    ) -> Result<entity::showtime::Model, TestError> {
        let start_at = Utc::now().trunc_subsecs(0) + Duration::days(1);

        Ok(
            entity::prelude::Showtime::insert(entity::showtime::ActiveModel {
                movie_id: ActiveValue::Set(movie_id),
                hall_id: ActiveValue::Set(hall_id),
                start_at: ActiveValue::Set(start_at),
                reserved_seats: ActiveValue::Set(0),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a showtime of a new movie in a new hall with `seat_count` seats
    pub async fn insert_mock_showtime(
        &self,
        seat_count: i32,
    ) -> Result<entity::showtime::Model, TestError> {
        let n = self.setup.next_sequence();
        let movie = self.insert_movie(&format!("Mock Movie {}", n)).await?;
        let hall = self
            .insert_hall(&format!("Mock Hall {}", n), seat_count)
            .await?;

        self.insert_showtime(movie.id, hall.id).await
    }
}

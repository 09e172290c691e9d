use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation row
    ///
    /// Does not touch the showtime's seat counter, callers inside the admission engine are
    /// responsible for claiming the seat in the same transaction.
    pub async fn create(
        &self,
        showtime_id: i32,
        user_id: i32,
    ) -> Result<entity::reservation::Model, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            showtime_id: ActiveValue::Set(showtime_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        reservation.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        reservation_id: i32,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_user_and_showtime(
        &self,
        user_id: i32,
        showtime_id: i32,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::ShowtimeId.eq(showtime_id))
            .one(self.db)
            .await
    }

    pub async fn count_by_showtime_id(&self, showtime_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::ShowtimeId.eq(showtime_id))
            .count(self.db)
            .await
    }

    /// Deletes a reservation
    ///
    /// Returns OK regardless of reservation existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, reservation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use marquee_test_utils::prelude::*;

        use crate::server::data::reservation::ReservationRepository;

        /// Expect success when creating a reservation for an existing user & showtime
        #[tokio::test]
        async fn creates_reservation() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let user_model = test.user().insert_user("alice").await?;
            let showtime_model = test.catalog().insert_mock_showtime(10).await?;

            let reservation_repository = ReservationRepository::new(&test.state.db);
            let reservation = reservation_repository
                .create(showtime_model.id, user_model.id)
                .await?;

            assert_eq!(reservation.showtime_id, showtime_model.id);
            assert_eq!(reservation.user_id, user_model.id);

            Ok(())
        }

        /// Expect a unique constraint violation for a second reservation of the same pair
        #[tokio::test]
        async fn fails_for_duplicate_pair() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let user_model = test.user().insert_user("alice").await?;
            let showtime_model = test.catalog().insert_mock_showtime(10).await?;

            let reservation_repository = ReservationRepository::new(&test.state.db);
            reservation_repository
                .create(showtime_model.id, user_model.id)
                .await?;
            let result = reservation_repository
                .create(showtime_model.id, user_model.id)
                .await;

            assert!(matches!(
                result.map_err(|e| e.sql_err()),
                Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
            ));

            Ok(())
        }

        /// Expect a foreign key violation when the user does not exist
        #[tokio::test]
        async fn fails_for_unknown_user() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let showtime_model = test.catalog().insert_mock_showtime(10).await?;

            let reservation_repository = ReservationRepository::new(&test.state.db);
            let result = reservation_repository.create(showtime_model.id, 42).await;

            assert!(matches!(
                result.map_err(|e| e.sql_err()),
                Err(Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_)))
            ));

            Ok(())
        }
    }

    mod get_by_user_id {
        use marquee_test_utils::prelude::*;

        use crate::server::data::reservation::ReservationRepository;

        /// Expect only the user's own reservations
        #[tokio::test]
        async fn returns_only_users_reservations() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let alice = test.user().insert_user("alice").await?;
            let bob = test.user().insert_user("bob").await?;
            let first = test.catalog().insert_mock_showtime(10).await?;
            let second = test.catalog().insert_mock_showtime(10).await?;
            test.reservation().insert_reservation(first.id, alice.id).await?;
            test.reservation().insert_reservation(second.id, alice.id).await?;
            test.reservation().insert_reservation(first.id, bob.id).await?;

            let reservation_repository = ReservationRepository::new(&test.state.db);
            let reservations = reservation_repository.get_by_user_id(alice.id).await?;

            assert_eq!(reservations.len(), 2);
            assert!(reservations.iter().all(|r| r.user_id == alice.id));

            Ok(())
        }
    }
}

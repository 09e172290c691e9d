use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Seating layout shared by create & update
pub struct HallLayout<'s> {
    pub name: &'s str,
    pub seat_count: i32,
    pub rows: i32,
    pub cols: i32,
}

pub struct HallRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HallRepository<'a, C> {
    /// Creates a new instance of [`HallRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, layout: HallLayout<'_>) -> Result<entity::hall::Model, DbErr> {
        let hall = entity::hall::ActiveModel {
            name: ActiveValue::Set(layout.name.to_string()),
            seat_count: ActiveValue::Set(layout.seat_count),
            rows: ActiveValue::Set(layout.rows),
            cols: ActiveValue::Set(layout.cols),
            ..Default::default()
        };

        hall.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::hall::Model>, DbErr> {
        entity::prelude::Hall::find()
            .order_by_asc(entity::hall::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, hall_id: i32) -> Result<Option<entity::hall::Model>, DbErr> {
        entity::prelude::Hall::find_by_id(hall_id).one(self.db).await
    }

    /// Fetch a hall selected `FOR UPDATE`, holding its row lock until the transaction ends
    pub async fn get_for_update(&self, hall_id: i32) -> Result<Option<entity::hall::Model>, DbErr> {
        entity::prelude::Hall::find_by_id(hall_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::hall::Model>, DbErr> {
        entity::prelude::Hall::find()
            .filter(entity::hall::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Replaces the layout of a hall
    ///
    /// Returns `None` if the hall does not exist.
    pub async fn update(
        &self,
        hall_id: i32,
        layout: HallLayout<'_>,
    ) -> Result<Option<entity::hall::Model>, DbErr> {
        let Some(hall) = entity::prelude::Hall::find_by_id(hall_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut hall_am = hall.into_active_model();
        hall_am.name = ActiveValue::Set(layout.name.to_string());
        hall_am.seat_count = ActiveValue::Set(layout.seat_count);
        hall_am.rows = ActiveValue::Set(layout.rows);
        hall_am.cols = ActiveValue::Set(layout.cols);

        let hall = hall_am.update(self.db).await?;

        Ok(Some(hall))
    }

    /// Deletes a hall
    ///
    /// Returns OK regardless of hall existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, hall_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Hall::delete_by_id(hall_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use marquee_test_utils::prelude::*;

        use crate::server::data::hall::{HallLayout, HallRepository};

        /// Expect success when creating a hall
        #[tokio::test]
        async fn creates_hall() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Hall)?;

            let hall_repository = HallRepository::new(&test.state.db);
            let hall = hall_repository
                .create(HallLayout {
                    name: "Main",
                    seat_count: 100,
                    rows: 10,
                    cols: 10,
                })
                .await?;

            assert_eq!(hall.name, "Main");
            assert_eq!(hall.seat_count, 100);

            Ok(())
        }

        /// Expect Error when the hall name is already taken
        #[tokio::test]
        async fn fails_for_duplicate_name() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Hall)?;
            test.catalog().insert_hall("Main", 10).await?;

            let hall_repository = HallRepository::new(&test.state.db);
            let result = hall_repository
                .create(HallLayout {
                    name: "Main",
                    seat_count: 10,
                    rows: 2,
                    cols: 5,
                })
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_for_update {
        use marquee_test_utils::prelude::*;

        use crate::server::data::hall::HallRepository;

        /// Expect the hall to be returned when it exists and None otherwise
        #[tokio::test]
        async fn returns_existing_hall() -> Result<(), TestError> {
            let test = test_setup_with_catalog_tables!()?;
            let hall_model = test.catalog().insert_hall("Main", 10).await?;

            let hall_repository = HallRepository::new(&test.state.db);
            let found = hall_repository.get_for_update(hall_model.id).await?;
            let missing = hall_repository.get_for_update(hall_model.id + 1).await?;

            assert_eq!(found.map(|hall| hall.seat_count), Some(10));
            assert!(missing.is_none());

            Ok(())
        }
    }

    mod update {
        use marquee_test_utils::prelude::*;

        use crate::server::data::hall::{HallLayout, HallRepository};

        /// Expect the layout to be replaced
        #[tokio::test]
        async fn updates_layout() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Hall)?;
            let hall_model = test.catalog().insert_hall("Main", 10).await?;

            let hall_repository = HallRepository::new(&test.state.db);
            let updated = hall_repository
                .update(
                    hall_model.id,
                    HallLayout {
                        name: "Grand",
                        seat_count: 20,
                        rows: 4,
                        cols: 5,
                    },
                )
                .await?
                .ok_or(TestError::Missing("hall"))?;

            assert_eq!(updated.name, "Grand");
            assert_eq!(updated.seat_count, 20);
            assert_eq!(updated.rows, 4);

            Ok(())
        }
    }
}

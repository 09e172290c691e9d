use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::catalog::UpsertHallDto,
    server::{
        data::{
            hall::{HallLayout, HallRepository},
            showtime::ShowtimeRepository,
        },
        error::{catalog::CatalogError, Error},
        model::db::HallModel,
        service::catalog::in_use_on_fk_violation,
    },
};

pub struct HallService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HallService<'a> {
    /// Creates a new instance of [`HallService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<HallModel>, Error> {
        Ok(HallRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, hall_id: i32) -> Result<HallModel, Error> {
        HallRepository::new(self.db)
            .get_by_id(hall_id)
            .await?
            .ok_or_else(|| CatalogError::HallNotFound(hall_id).into())
    }

    /// Creates a hall
    ///
    /// # Returns
    /// - `Ok(HallModel)` - The created hall
    /// - `Err(CatalogError::BadRequest)` - Blank name or impossible layout
    /// - `Err(CatalogError::HallNameTaken)` - Name already used by another hall
    pub async fn create(&self, hall: &UpsertHallDto) -> Result<HallModel, Error> {
        let layout = validate_layout(hall)?;
        let hall_repo = HallRepository::new(self.db);

        if hall_repo.get_by_name(layout.name).await?.is_some() {
            return Err(CatalogError::HallNameTaken(layout.name.to_string()).into());
        }

        let name = layout.name.to_string();
        let hall = hall_repo
            .create(layout)
            .await
            .map_err(|err| name_taken_on_unique_violation(err, &name))?;

        tracing::info!(hall_id = hall.id, seat_count = hall.seat_count, "Created hall {:?}", hall.name);

        Ok(hall)
    }

    /// Replaces a hall's name & layout
    ///
    /// The new seat count may not be lower than the reserved seats of any showtime in the hall.
    /// The hall and its showtimes stay locked from that check until the new layout is committed.
    pub async fn update(&self, hall_id: i32, hall: &UpsertHallDto) -> Result<HallModel, Error> {
        let layout = validate_layout(hall)?;

        let txn = self.db.begin().await?;
        let hall_repo = HallRepository::new(&txn);

        if hall_repo.get_for_update(hall_id).await?.is_none() {
            return Err(CatalogError::HallNotFound(hall_id).into());
        }

        if let Some(existing) = hall_repo.get_by_name(layout.name).await? {
            if existing.id != hall_id {
                return Err(CatalogError::HallNameTaken(layout.name.to_string()).into());
            }
        }

        if let Some(reserved) = ShowtimeRepository::new(&txn)
            .max_reserved_for_hall(hall_id)
            .await?
        {
            if layout.seat_count < reserved {
                return Err(CatalogError::CapacityBelowReserved {
                    capacity: layout.seat_count,
                    reserved,
                }
                .into());
            }
        }

        let name = layout.name.to_string();
        let hall = hall_repo
            .update(hall_id, layout)
            .await
            .map_err(|err| name_taken_on_unique_violation(err, &name))?
            .ok_or(CatalogError::HallNotFound(hall_id))?;

        txn.commit().await?;

        tracing::info!(hall_id, seat_count = hall.seat_count, "Updated hall {:?}", hall.name);

        Ok(hall)
    }

    /// Deletes a hall no showtime is scheduled in
    pub async fn delete(&self, hall_id: i32) -> Result<(), Error> {
        let hall_repo = HallRepository::new(self.db);

        if hall_repo.get_by_id(hall_id).await?.is_none() {
            return Err(CatalogError::HallNotFound(hall_id).into());
        }

        let showtimes = ShowtimeRepository::new(self.db)
            .count_by_hall_id(hall_id)
            .await?;
        if showtimes > 0 {
            return Err(CatalogError::InUse(format!(
                "Hall ID {} with {} showtime(s)",
                hall_id, showtimes
            ))
            .into());
        }

        hall_repo
            .delete(hall_id)
            .await
            .map_err(|err| in_use_on_fk_violation(err, format!("Hall ID {}", hall_id)))?;

        tracing::info!(hall_id, "Deleted hall");

        Ok(())
    }
}

/// Rejects blank names and layouts that cannot seat `seat_count` people
fn validate_layout(hall: &UpsertHallDto) -> Result<HallLayout<'_>, CatalogError> {
    let name = hall.name.trim();
    if name.is_empty() {
        return Err(CatalogError::BadRequest("Hall name must not be empty".to_string()));
    }
    if hall.seat_count < 1 || hall.rows < 1 || hall.cols < 1 {
        return Err(CatalogError::BadRequest(
            "Seat count, rows and cols must be at least 1".to_string(),
        ));
    }
    if i64::from(hall.seat_count) > i64::from(hall.rows) * i64::from(hall.cols) {
        return Err(CatalogError::BadRequest(format!(
            "Seat count {} does not fit in {} rows of {} seats",
            hall.seat_count, hall.rows, hall.cols
        )));
    }

    Ok(HallLayout {
        name,
        seat_count: hall.seat_count,
        rows: hall.rows,
        cols: hall.cols,
    })
}

fn name_taken_on_unique_violation(err: sea_orm::DbErr, name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            CatalogError::HallNameTaken(name.to_string()).into()
        }
        _ => err.into(),
    }
}

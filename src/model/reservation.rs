use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub showtime_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub showtime_id: i32,
}

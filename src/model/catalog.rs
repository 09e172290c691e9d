use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub description: String,
}

/// Body for creating or replacing a movie
#[derive(Clone, Deserialize, ToSchema)]
pub struct UpsertMovieDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Optional filter for listing movies
#[derive(Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieQuery {
    /// Exact title to look up
    pub title: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HallDto {
    pub id: i32,
    pub name: String,
    pub seat_count: i32,
    pub rows: i32,
    pub cols: i32,
}

/// Body for creating or replacing a hall
#[derive(Clone, Deserialize, ToSchema)]
pub struct UpsertHallDto {
    pub name: String,
    pub seat_count: i32,
    pub rows: i32,
    pub cols: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShowtimeDto {
    pub id: i32,
    pub movie_id: i32,
    pub hall_id: i32,
    pub start_at: DateTime<Utc>,
}

#[derive(Clone, Deserialize, ToSchema)]
pub struct CreateShowtimeDto {
    pub movie_id: i32,
    pub hall_id: i32,
    pub start_at: DateTime<Utc>,
}

/// Partial update, at least one field must be present
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct UpdateShowtimeDto {
    pub start_at: Option<DateTime<Utc>>,
    pub hall_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityDto {
    pub showtime_id: i32,
    pub capacity: i32,
    pub remaining_tickets: i32,
}

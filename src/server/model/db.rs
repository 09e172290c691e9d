//! Database model type aliases and their conversions into API DTOs.

use entity::marquee_user::UserRole;

use crate::model::{
    catalog::{HallDto, MovieDto, ShowtimeDto},
    reservation::ReservationDto,
    user::{Role, UserDto},
};

pub type UserModel = entity::marquee_user::Model;
pub type MovieModel = entity::movie::Model;
pub type HallModel = entity::hall::Model;
pub type ShowtimeModel = entity::showtime::Model;
pub type ReservationModel = entity::reservation::Model;

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::User => Role::User,
            UserRole::Admin => Role::Admin,
        }
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => UserRole::User,
            Role::Admin => UserRole::Admin,
        }
    }
}

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.name,
            role: user.role.into(),
        }
    }
}

impl From<MovieModel> for MovieDto {
    fn from(movie: MovieModel) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
        }
    }
}

impl From<HallModel> for HallDto {
    fn from(hall: HallModel) -> Self {
        Self {
            id: hall.id,
            name: hall.name,
            seat_count: hall.seat_count,
            rows: hall.rows,
            cols: hall.cols,
        }
    }
}

impl From<ShowtimeModel> for ShowtimeDto {
    fn from(showtime: ShowtimeModel) -> Self {
        Self {
            id: showtime.id,
            movie_id: showtime.movie_id,
            hall_id: showtime.hall_id,
            start_at: showtime.start_at,
        }
    }
}

impl From<ReservationModel> for ReservationDto {
    fn from(reservation: ReservationModel) -> Self {
        Self {
            id: reservation.id,
            showtime_id: reservation.showtime_id,
            user_id: reservation.user_id,
            created_at: reservation.created_at,
        }
    }
}

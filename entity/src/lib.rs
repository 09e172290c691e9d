//! SeaORM entities for the marquee schema.

pub mod prelude;

pub mod hall;
pub mod marquee_user;
pub mod movie;
pub mod reservation;
pub mod showtime;

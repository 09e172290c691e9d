pub use super::hall::Entity as Hall;
pub use super::marquee_user::Entity as MarqueeUser;
pub use super::movie::Entity as Movie;
pub use super::reservation::Entity as Reservation;
pub use super::showtime::Entity as Showtime;

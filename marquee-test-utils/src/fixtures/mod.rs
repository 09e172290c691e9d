//! Database fixtures, reached through [`crate::TestSetup::user`], [`crate::TestSetup::catalog`]
//! and [`crate::TestSetup::reservation`].

pub mod catalog;
pub mod reservation;
pub mod user;

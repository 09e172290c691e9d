//! Request helpers shared by controllers: token extraction & role guards, and the `jwt` cookie.

pub mod auth;
pub mod cookie;

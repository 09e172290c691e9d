//! Constant values shared by tests. None of these are real credentials.

/// Secret used to sign tokens in tests
pub static TEST_JWT_SECRET: &str = "marquee-test-secret";

/// Placeholder stored as the password hash of fixture users
///
/// Not a valid PHC string, fixture users cannot log in. Create users through the user service
/// when a test needs working credentials.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";

/// Name of the unique index enforcing one reservation per user & showtime
pub static RESERVATION_UNIQUE_INDEX: &str = "idx_reservation_showtime_user";

//! Test harness for marquee: an in-memory SQLite database per test, schema helpers and data
//! fixtures.
//!
//! Tests either use the setup macros or chain a [`TestBuilder`]:
//!
//! ```no_run
//! use marquee_test_utils::prelude::*;
//!
//! # async fn example() -> Result<(), TestError> {
//! let test = test_setup_with_catalog_tables!()?;
//! let user = test.user().insert_user("alice").await?;
//! let showtime = test.catalog().insert_mock_showtime(10).await?;
//! test.reservation().insert_reservation(showtime.id, user.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        test_setup_with_catalog_tables, test_setup_with_tables, TestBuilder, TestError,
        TestSetup,
    };
}

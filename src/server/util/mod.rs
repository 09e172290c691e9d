//! Utility functions shared across server services.

pub mod password;


use marquee_test_utils::prelude::*;

use crate::server::{
    error::{catalog::CatalogError, Error},
    service::catalog::{hall::HallService, movie::MovieService, showtime::ShowtimeService},
};

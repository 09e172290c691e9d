mod create_identity;

use marquee_test_utils::prelude::*;

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, Error},
        service::user::UserService,
    },
};

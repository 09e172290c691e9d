pub use sea_orm_migration::prelude::*;

mod m20251101_000001_marquee_user;
mod m20251101_000002_movie;
mod m20251101_000003_hall;
mod m20251101_000004_showtime;
mod m20251101_000005_reservation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_marquee_user::Migration),
            Box::new(m20251101_000002_movie::Migration),
            Box::new(m20251101_000003_hall::Migration),
            Box::new(m20251101_000004_showtime::Migration),
            Box::new(m20251101_000005_reservation::Migration),
        ]
    }
}

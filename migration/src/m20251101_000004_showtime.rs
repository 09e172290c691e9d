use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_movie::Movie, m20251101_000003_hall::Hall};

static IDX_SHOWTIME_MOVIE_ID: &str = "idx-showtime-movie_id";
static FK_SHOWTIME_MOVIE_ID: &str = "fk-showtime-movie_id";
static FK_SHOWTIME_HALL_ID: &str = "fk-showtime-hall_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Showtime::Table)
                    .if_not_exists()
                    .col(pk_auto(Showtime::Id))
                    .col(integer(Showtime::MovieId))
                    .col(integer(Showtime::HallId))
                    .col(timestamp_with_time_zone(Showtime::StartAt))
                    .col(integer(Showtime::ReservedSeats).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOWTIME_MOVIE_ID)
                    .table(Showtime::Table)
                    .col(Showtime::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOWTIME_MOVIE_ID)
                    .from_tbl(Showtime::Table)
                    .from_col(Showtime::MovieId)
                    .to_tbl(Movie::Table)
                    .to_col(Movie::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHOWTIME_HALL_ID)
                    .from_tbl(Showtime::Table)
                    .from_col(Showtime::HallId)
                    .to_tbl(Hall::Table)
                    .to_col(Hall::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOWTIME_HALL_ID)
                    .table(Showtime::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SHOWTIME_MOVIE_ID)
                    .table(Showtime::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOWTIME_MOVIE_ID)
                    .table(Showtime::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Showtime::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Showtime {
    Table,
    Id,
    MovieId,
    HallId,
    StartAt,
    ReservedSeats,
}

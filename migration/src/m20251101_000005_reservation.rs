use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_marquee_user::MarqueeUser, m20251101_000004_showtime::Showtime};

static IDX_RESERVATION_USER_ID: &str = "idx-reservation-user_id";
static UNIQUE_RESERVATION_SHOWTIME_USER: &str = "uniq-reservation-showtime_id-user_id";
static FK_RESERVATION_SHOWTIME_ID: &str = "fk-reservation-showtime_id";
static FK_RESERVATION_USER_ID: &str = "fk-reservation-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::ShowtimeId))
                    .col(integer(Reservation::UserId))
                    .col(timestamp_with_time_zone(Reservation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Backstop for the one-reservation-per-user-per-showtime rule
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_RESERVATION_SHOWTIME_USER)
                    .table(Reservation::Table)
                    .col(Reservation::ShowtimeId)
                    .col(Reservation::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .col(Reservation::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_SHOWTIME_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::ShowtimeId)
                    .to_tbl(Showtime::Table)
                    .to_col(Showtime::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_USER_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::UserId)
                    .to_tbl(MarqueeUser::Table)
                    .to_col(MarqueeUser::Id)
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
                    .name(FK_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESERVATION_SHOWTIME_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RESERVATION_USER_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UNIQUE_RESERVATION_SHOWTIME_USER)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    Id,
    ShowtimeId,
    UserId,
    CreatedAt,
}

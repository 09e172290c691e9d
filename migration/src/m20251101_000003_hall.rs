use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hall::Table)
                    .if_not_exists()
                    .col(pk_auto(Hall::Id))
                    .col(string_uniq(Hall::Name))
                    .col(integer(Hall::SeatCount))
                    .col(integer(Hall::Rows))
                    .col(integer(Hall::Cols))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hall::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Hall {
    Table,
    Id,
    Name,
    SeatCount,
    Rows,
    Cols,
}

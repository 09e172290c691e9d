use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MarqueeUser::Table)
                    .if_not_exists()
                    .col(pk_auto(MarqueeUser::Id))
                    .col(string_uniq(MarqueeUser::Name))
                    .col(string(MarqueeUser::PasswordHash))
                    .col(string_len(MarqueeUser::Role, 16))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MarqueeUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MarqueeUser {
    Table,
    Id,
    Name,
    PasswordHash,
    Role,
}

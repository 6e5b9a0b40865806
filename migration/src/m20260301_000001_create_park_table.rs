use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Park::Table)
                    .if_not_exists()
                    .col(pk_auto(Park::Id))
                    .col(string_uniq(Park::Name))
                    .col(date_null(Park::Established))
                    .col(string(Park::State))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Park::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Park {
    Table,
    Id,
    Name,
    Established,
    State,
}

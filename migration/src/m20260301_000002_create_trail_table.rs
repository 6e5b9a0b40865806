use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_park_table::Park;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trail::Table)
                    .if_not_exists()
                    .col(pk_auto(Trail::Id))
                    .col(string_uniq(Trail::Name))
                    .col(double(Trail::Distance))
                    .col(integer(Trail::Difficulty))
                    .col(double(Trail::ElevationGain))
                    .col(integer(Trail::ParkId))
                    // NO ACTION rather than RESTRICT: SQLite reports both as a foreign key
                    // failure, but only NO ACTION carries the FOREIGNKEY extended code.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trail_park_id")
                            .from(Trail::Table, Trail::ParkId)
                            .to(Park::Table, Park::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trail_park_id")
                    .table(Trail::Table)
                    .col(Trail::ParkId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trail {
    Table,
    Id,
    Name,
    Distance,
    Difficulty,
    ElevationGain,
    ParkId,
}

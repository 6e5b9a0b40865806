use sea_orm::entity::prelude::*;

/// Difficulty rating of a trail, stored as its integer discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum Difficulty {
    #[sea_orm(num_value = 0)]
    Easy,
    #[sea_orm(num_value = 1)]
    Moderate,
    #[sea_orm(num_value = 2)]
    Difficult,
    #[sea_orm(num_value = 3)]
    Expert,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub distance: f64,
    pub difficulty: Difficulty,
    pub elevation_gain: f64,
    pub park_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::park::Entity",
        from = "Column::ParkId",
        to = "super::park::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Park,
}

impl Related<super::park::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Park.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

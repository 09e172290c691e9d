use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "showtime")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_id: i32,
    pub hall_id: i32,
    pub start_at: DateTimeUtc,
    /// Number of reservations currently held for this showtime.
    #[sea_orm(default_value = 0)]
    pub reserved_seats: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::hall::Entity",
        from = "Column::HallId",
        to = "super::hall::Column::Id"
    )]
    Hall,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hall.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

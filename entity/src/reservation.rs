use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub showtime_id: i32,
    pub user_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::showtime::Entity",
        from = "Column::ShowtimeId",
        to = "super::showtime::Column::Id"
    )]
    Showtime,
    #[sea_orm(
        belongs_to = "super::marquee_user::Entity",
        from = "Column::UserId",
        to = "super::marquee_user::Column::Id"
    )]
    MarqueeUser,
}

impl Related<super::showtime::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Showtime.def()
    }
}

impl Related<super::marquee_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MarqueeUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

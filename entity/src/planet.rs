use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub gravity: Option<String>,
    pub population: Option<i64>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub climate: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub terrain: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub surface_water: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub planet_pic: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub hair_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub skin_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub eye_color: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub birth_year: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub homeworld: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub character_pic: Option<String>,
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

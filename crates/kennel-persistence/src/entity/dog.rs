//! `SeaORM` Entity for dog table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "dog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    pub age: i32,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub gender: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub color: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub favorite_food: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub favorite_toy: String,
    pub breed_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::breed::Entity",
        from = "Column::BreedId",
        to = "super::breed::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Breed,
}

impl Related<super::breed::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Breed.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

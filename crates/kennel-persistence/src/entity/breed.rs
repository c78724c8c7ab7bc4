//! `SeaORM` Entity for breed table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "breed")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    /// One-letter size code, see `kennel_common::BreedSize`
    #[sea_orm(column_type = "String(StringLen::N(1))")]
    pub size: String,
    pub friendliness: i32,
    pub trainability: i32,
    pub shedding_amount: i32,
    pub exercise_needs: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dog::Entity")]
    Dog,
}

impl Related<super::dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

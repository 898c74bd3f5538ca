use sea_orm::entity::prelude::*;

use crate::structs::element_struct::Element;
use crate::structs::weapon_struct::WeaponClass;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "weapons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    pub weapon_class: WeaponClass,
    pub element: Element,
    pub base_damage: i32,
    pub critical_chance: i32,
    #[sea_orm(column_type = "Double")]
    pub attacks_per_turn: f64,
    pub range: i32,
    pub rarity: i32,
    pub price: i32,
    pub quality: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub abilities: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub image_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::element_service::{resolve, ElementGroup};
use crate::entity::weapons;
use crate::structs::element_struct::Element;
use crate::structs::weapon_struct::{NewWeapon, ValidationErrors, WeaponClass, WeaponRequest};

/// Resolves the free-text element and validates the rest of the payload.
pub fn validate_request(request: &WeaponRequest) -> Result<NewWeapon, ValidationErrors> {
    request.validate(resolve(request.element.as_deref()))
}

fn apply(active: &mut weapons::ActiveModel, weapon: NewWeapon) {
    active.name = Set(weapon.name);
    active.weapon_class = Set(weapon.weapon_class);
    active.element = Set(weapon.element);
    active.base_damage = Set(weapon.base_damage);
    active.critical_chance = Set(weapon.critical_chance);
    active.attacks_per_turn = Set(weapon.attacks_per_turn);
    active.range = Set(weapon.range);
    active.rarity = Set(weapon.rarity);
    active.price = Set(weapon.price);
    active.quality = Set(weapon.quality);
    active.abilities = Set(weapon.abilities);
    active.description = Set(weapon.description);
    active.image_url = Set(weapon.image_url);
}

/// Inserts a weapon through a pooled connection or an open transaction.
pub async fn create<C>(db: &C, weapon: NewWeapon) -> Result<weapons::Model, DbErr>
where
    C: ConnectionTrait,
{
    let now = Utc::now().fixed_offset();
    let mut active = weapons::ActiveModel {
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply(&mut active, weapon);

    let model = active.insert(db).await?;
    tracing::info!(
        id = model.id,
        name = %model.name,
        element = model.element.name(),
        "weapon created"
    );
    Ok(model)
}

/// Replaces every field of an existing weapon. `None` when the id is unknown.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    weapon: NewWeapon,
) -> Result<Option<weapons::Model>, DbErr> {
    let Some(existing) = find_by_id(db, id).await? else {
        return Ok(None);
    };

    let mut active: weapons::ActiveModel = existing.into();
    apply(&mut active, weapon);
    active.updated_at = Set(Utc::now().fixed_offset());

    let model = active.update(db).await?;
    tracing::info!(id, "weapon updated");
    Ok(Some(model))
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = weapons::Entity::delete_by_id(id).exec(db).await?;
    if result.rows_affected > 0 {
        tracing::info!(id, "weapon deleted");
    }
    Ok(result.rows_affected > 0)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<weapons::Model>, DbErr> {
    weapons::Entity::find_by_id(id).one(db).await
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<weapons::Model>, DbErr> {
    weapons::Entity::find()
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    weapons::Entity::find().count(db).await
}

pub async fn find_by_class(
    db: &DatabaseConnection,
    weapon_class: WeaponClass,
) -> Result<Vec<weapons::Model>, DbErr> {
    tracing::debug!(?weapon_class, "filtering weapons by class");
    weapons::Entity::find()
        .filter(weapons::Column::WeaponClass.eq(weapon_class))
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

pub async fn find_by_class_min_rarity(
    db: &DatabaseConnection,
    weapon_class: WeaponClass,
    min_rarity: i32,
) -> Result<Vec<weapons::Model>, DbErr> {
    tracing::debug!(?weapon_class, min_rarity, "filtering weapons by class and rarity");
    weapons::Entity::find()
        .filter(weapons::Column::WeaponClass.eq(weapon_class))
        .filter(weapons::Column::Rarity.gte(min_rarity))
        .order_by_asc(weapons::Column::Rarity)
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

pub async fn find_by_element(
    db: &DatabaseConnection,
    element: Element,
) -> Result<Vec<weapons::Model>, DbErr> {
    tracing::debug!(element = element.name(), "filtering weapons by element");
    weapons::Entity::find()
        .filter(weapons::Column::Element.eq(element))
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

/// `None` means "other": no filter is applied.
pub async fn find_by_element_group(
    db: &DatabaseConnection,
    group: Option<ElementGroup>,
) -> Result<Vec<weapons::Model>, DbErr> {
    let Some(group) = group else {
        return find_all(db).await;
    };

    tracing::debug!(?group, "filtering weapons by element group");
    weapons::Entity::find()
        .filter(weapons::Column::Element.is_in(group.members()))
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

pub async fn find_by_rarity(
    db: &DatabaseConnection,
    rarity: i32,
) -> Result<Vec<weapons::Model>, DbErr> {
    weapons::Entity::find()
        .filter(weapons::Column::Rarity.eq(rarity))
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

/// Case-insensitive substring match on the weapon name.
pub async fn search_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Vec<weapons::Model>, DbErr> {
    let pattern = format!("%{}%", name.to_lowercase());
    weapons::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col((
                weapons::Entity,
                weapons::Column::Name,
            ))))
            .like(pattern),
        )
        .order_by_asc(weapons::Column::Id)
        .all(db)
        .await
}

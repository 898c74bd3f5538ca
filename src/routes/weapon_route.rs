use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;

use crate::entity::weapons;
use crate::error::ApiError;
use crate::services::element_service::{resolve, ElementGroup};
use crate::services::rules_service::{
    apply_bonus, are_compatible, bonus_multiplier, bonus_percentage, has_valid_element,
    is_suitable_for_level,
};
use crate::services::weapon_service;
use crate::structs::routes_struct::{
    compatibility_reason, SearchQuery, WeaponBonusResponse, WeaponCompatibilityResponse,
    WeaponPairRequest, WeaponResponse, WeaponSuitabilityResponse,
};
use crate::structs::weapon_struct::{WeaponClass, WeaponRequest};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_weapons))
        .route("", web::post().to(create_weapon))
        .route("/search", web::get().to(search_weapons))
        .route("/compatibility", web::post().to(weapon_compatibility))
        .route("/element/{element}", web::get().to(weapons_by_element))
        .route("/group/{group}", web::get().to(weapons_by_group))
        .route("/class/{class}", web::get().to(weapons_by_class))
        .route(
            "/class/{class}/rarity/{min}",
            web::get().to(weapons_by_class_min_rarity),
        )
        .route("/rarity/{rarity}", web::get().to(weapons_by_rarity))
        .route("/{id}/bonus", web::get().to(weapon_bonus))
        .route("/{id}/suitability/{level}", web::get().to(weapon_suitability))
        .route("/{id}", web::get().to(get_weapon))
        .route("/{id}", web::put().to(update_weapon))
        .route("/{id}", web::delete().to(delete_weapon));
}

fn weapon_response(model: weapons::Model) -> WeaponResponse {
    WeaponResponse {
        id: model.id,
        name: model.name,
        weapon_class: model.weapon_class,
        element: model.element,
        element_display_name: model.element.display_name(),
        element_color: model.element.color(),
        has_valid_element: has_valid_element(model.element),
        base_damage: model.base_damage,
        critical_chance: model.critical_chance,
        attacks_per_turn: model.attacks_per_turn,
        range: model.range,
        rarity: model.rarity,
        price: model.price,
        quality: model.quality,
        abilities: model.abilities,
        description: model.description,
        image_url: model.image_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn listing(models: Vec<weapons::Model>) -> HttpResponse {
    let weapons: Vec<WeaponResponse> = models.into_iter().map(weapon_response).collect();
    HttpResponse::Ok().json(weapons)
}

async fn require(db: &DatabaseConnection, id: i32) -> Result<weapons::Model, ApiError> {
    weapon_service::find_by_id(db, id)
        .await?
        .ok_or(ApiError::NotFound(id))
}

pub async fn list_weapons(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, ApiError> {
    Ok(listing(weapon_service::find_all(db.get_ref()).await?))
}

pub async fn get_weapon(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let model = require(db.get_ref(), id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(weapon_response(model)))
}

pub async fn weapons_by_element(
    db: web::Data<DatabaseConnection>,
    element: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let element = resolve(Some(element.as_str()));
    Ok(listing(
        weapon_service::find_by_element(db.get_ref(), element).await?,
    ))
}

pub async fn weapons_by_group(
    db: web::Data<DatabaseConnection>,
    group: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let group = ElementGroup::parse(&group);
    Ok(listing(
        weapon_service::find_by_element_group(db.get_ref(), group).await?,
    ))
}

pub async fn weapons_by_class(
    db: web::Data<DatabaseConnection>,
    class: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let weapon_class = class.parse::<WeaponClass>()?;
    Ok(listing(
        weapon_service::find_by_class(db.get_ref(), weapon_class).await?,
    ))
}

pub async fn weapons_by_class_min_rarity(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse, ApiError> {
    let (class, min_rarity) = path.into_inner();
    let weapon_class = class.parse::<WeaponClass>()?;
    Ok(listing(
        weapon_service::find_by_class_min_rarity(db.get_ref(), weapon_class, min_rarity).await?,
    ))
}

pub async fn weapons_by_rarity(
    db: web::Data<DatabaseConnection>,
    rarity: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    Ok(listing(
        weapon_service::find_by_rarity(db.get_ref(), rarity.into_inner()).await?,
    ))
}

pub async fn search_weapons(
    db: web::Data<DatabaseConnection>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    if query.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Search name must not be blank".to_string()));
    }
    Ok(listing(
        weapon_service::search_by_name(db.get_ref(), &query.name).await?,
    ))
}

pub async fn create_weapon(
    db: web::Data<DatabaseConnection>,
    body: web::Json<WeaponRequest>,
) -> Result<HttpResponse, ApiError> {
    let weapon = weapon_service::validate_request(&body).inspect_err(|errors| {
        tracing::warn!(fields = ?errors.fields().collect::<Vec<_>>(), "rejected weapon payload");
    })?;
    let model = weapon_service::create(db.get_ref(), weapon).await?;
    Ok(HttpResponse::Created().json(weapon_response(model)))
}

pub async fn update_weapon(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
    body: web::Json<WeaponRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let weapon = weapon_service::validate_request(&body).inspect_err(|errors| {
        tracing::warn!(id, fields = ?errors.fields().collect::<Vec<_>>(), "rejected weapon update");
    })?;
    let model = weapon_service::update(db.get_ref(), id, weapon)
        .await?
        .ok_or(ApiError::NotFound(id))?;
    Ok(HttpResponse::Ok().json(weapon_response(model)))
}

pub async fn delete_weapon(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !weapon_service::delete(db.get_ref(), id).await? {
        return Err(ApiError::NotFound(id));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn weapon_bonus(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let model = require(db.get_ref(), id.into_inner()).await?;
    let element = model.element;
    Ok(HttpResponse::Ok().json(WeaponBonusResponse {
        weapon_id: model.id,
        weapon_name: model.name,
        element,
        element_display_name: element.display_name(),
        base_damage: model.base_damage,
        bonus_multiplier: bonus_multiplier(element),
        final_damage: apply_bonus(i64::from(model.base_damage), element),
        bonus_percentage: bonus_percentage(element),
    }))
}

pub async fn weapon_suitability(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(i32, u32)>,
) -> Result<HttpResponse, ApiError> {
    let (id, boss_level) = path.into_inner();
    let model = require(db.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(WeaponSuitabilityResponse {
        weapon_id: model.id,
        element: model.element,
        element_display_name: model.element.display_name(),
        boss_level,
        is_suitable: is_suitable_for_level(model.element, boss_level),
    }))
}

pub async fn weapon_compatibility(
    db: web::Data<DatabaseConnection>,
    body: web::Json<WeaponPairRequest>,
) -> Result<HttpResponse, ApiError> {
    let (first, second) = futures::try_join!(
        require(db.get_ref(), body.first_id),
        require(db.get_ref(), body.second_id)
    )?;
    let is_compatible = are_compatible(first.element, second.element);
    Ok(HttpResponse::Ok().json(WeaponCompatibilityResponse {
        first_id: first.id,
        second_id: second.id,
        first_element: first.element,
        second_element: second.element,
        is_compatible,
        reason: compatibility_reason(is_compatible),
    }))
}

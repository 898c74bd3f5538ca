use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use super::element_struct::Element;
use super::weapon_struct::{FieldError, WeaponClass};

#[derive(Debug, Serialize)]
pub struct HTTPErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfoResponse {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub effect_key: &'static str,
    pub color: &'static str,
    pub has_effect: bool,
    pub is_vanilla: bool,
    pub is_calamity: bool,
    pub is_supreme: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementValidationRequest {
    pub element_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementValidationResponse {
    pub element_name: &'static str,
    pub display_name: &'static str,
    pub is_valid: bool,
    pub has_effect: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBonusRequest {
    pub base_damage: i32,
    pub element_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBonusResponse {
    pub base_damage: i32,
    pub element: Element,
    pub element_display_name: &'static str,
    pub bonus_multiplier: f64,
    pub final_damage: i64,
    pub bonus_percentage: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCompatibilityRequest {
    pub element1: Option<String>,
    pub element2: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementCompatibilityResponse {
    pub element1: Element,
    pub element2: Element,
    pub is_compatible: bool,
    pub reason: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSuitabilityRequest {
    pub element_name: Option<String>,
    pub boss_level: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSuitabilityResponse {
    pub element: Element,
    pub element_display_name: &'static str,
    pub boss_level: u32,
    pub is_suitable: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponResponse {
    pub id: i32,
    pub name: String,
    pub weapon_class: WeaponClass,
    pub element: Element,
    pub element_display_name: &'static str,
    pub element_color: &'static str,
    pub has_valid_element: bool,
    pub base_damage: i32,
    pub critical_chance: i32,
    pub attacks_per_turn: f64,
    pub range: i32,
    pub rarity: i32,
    pub price: i32,
    pub quality: i32,
    pub abilities: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponPairRequest {
    pub first_id: i32,
    pub second_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponBonusResponse {
    pub weapon_id: i32,
    pub weapon_name: String,
    pub element: Element,
    pub element_display_name: &'static str,
    pub base_damage: i32,
    pub bonus_multiplier: f64,
    pub final_damage: i64,
    pub bonus_percentage: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponSuitabilityResponse {
    pub weapon_id: i32,
    pub element: Element,
    pub element_display_name: &'static str,
    pub boss_level: u32,
    pub is_suitable: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponCompatibilityResponse {
    pub first_id: i32,
    pub second_id: i32,
    pub first_element: Element,
    pub second_element: Element,
    pub is_compatible: bool,
    pub reason: &'static str,
}

pub fn compatibility_reason(compatible: bool) -> &'static str {
    if compatible {
        "Elementos compatíveis para combinação"
    } else {
        "Elementos incompatíveis"
    }
}

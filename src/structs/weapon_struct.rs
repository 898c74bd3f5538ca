use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::element_struct::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum WeaponClass {
    #[sea_orm(string_value = "MELEE")]
    Melee,
    #[sea_orm(string_value = "RANGED")]
    Ranged,
    #[sea_orm(string_value = "MAGE")]
    Mage,
    #[sea_orm(string_value = "SUMMON")]
    Summon,
    #[sea_orm(string_value = "ROGUE")]
    Rogue,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value '{0}' for weapon class")]
pub struct InvalidWeaponClass(pub String);

impl FromStr for WeaponClass {
    type Err = InvalidWeaponClass;

    /// Strict: unlike elements there is no fallback class.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MELEE" => Ok(WeaponClass::Melee),
            "RANGED" => Ok(WeaponClass::Ranged),
            "MAGE" => Ok(WeaponClass::Mage),
            "SUMMON" => Ok(WeaponClass::Summon),
            "ROGUE" => Ok(WeaponClass::Rogue),
            _ => Err(InvalidWeaponClass(s.to_string())),
        }
    }
}

/// Create/update payload as sent by clients. Class and element arrive as
/// plain strings and are converted during validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponRequest {
    pub name: Option<String>,
    pub weapon_class: Option<String>,
    pub element: Option<String>,
    pub base_damage: Option<i32>,
    pub critical_chance: Option<i32>,
    pub attacks_per_turn: Option<f64>,
    pub range: Option<i32>,
    pub rarity: Option<i32>,
    pub price: Option<i32>,
    pub quality: Option<i32>,
    pub abilities: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// A weapon that passed validation and can be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWeapon {
    pub name: String,
    pub weapon_class: WeaponClass,
    pub element: Element,
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
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, thiserror::Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    /// Checks a required integer against an inclusive range.
    fn check_range(
        &mut self,
        field: &'static str,
        value: Option<i32>,
        min: i32,
        max: Option<i32>,
    ) -> i32 {
        let Some(v) = value else {
            self.push(field, "must be provided");
            return 0;
        };
        match max {
            Some(max) if v < min || v > max => {
                self.push(field, format!("must be between {min} and {max}"))
            }
            None if v < min => self.push(field, format!("must be at least {min}")),
            _ => {}
        }
        v
    }
}

impl WeaponRequest {
    /// Checks every field independently and reports all failures at once.
    ///
    /// The weapon class is rejected outright when unknown. The element is
    /// resolved by the caller, since free-text labels never fail.
    pub fn validate(&self, element: Element) -> Result<NewWeapon, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                errors.push("name", "must not be blank");
                String::new()
            }
        };

        let weapon_class = match self.weapon_class.as_deref() {
            None => {
                errors.push("weaponClass", "must be provided");
                None
            }
            Some(raw) => match raw.parse::<WeaponClass>() {
                Ok(class) => Some(class),
                Err(e) => {
                    errors.push("weaponClass", e.to_string());
                    None
                }
            },
        };

        let base_damage = errors.check_range("baseDamage", self.base_damage, 1, None);
        let critical_chance =
            errors.check_range("criticalChance", self.critical_chance, 1, Some(20));

        let attacks_per_turn = match self.attacks_per_turn {
            None => {
                errors.push("attacksPerTurn", "must be provided");
                0.0
            }
            Some(v) if !v.is_finite() || v < 1.0 => {
                errors.push("attacksPerTurn", "must be at least 1.0");
                v
            }
            Some(v) => v,
        };

        let range = errors.check_range("range", self.range, 0, None);
        let rarity = errors.check_range("rarity", self.rarity, -1, Some(17));
        let price = errors.check_range("price", self.price, 0, None);
        let quality = errors.check_range("quality", self.quality, 0, Some(10));

        match weapon_class {
            Some(weapon_class) if errors.errors.is_empty() => Ok(NewWeapon {
                name,
                weapon_class,
                element,
                base_damage,
                critical_chance,
                attacks_per_turn,
                range,
                rarity,
                price,
                quality,
                abilities: self.abilities.clone(),
                description: self.description.clone(),
                image_url: self.image_url.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_request() -> WeaponRequest {
    WeaponRequest {
        name: Some("Excalibur".to_string()),
        weapon_class: Some("melee".to_string()),
        element: Some("holy".to_string()),
        base_damage: Some(44),
        critical_chance: Some(8),
        attacks_per_turn: Some(1.3),
        range: Some(65),
        rarity: Some(5),
        price: Some(8000),
        quality: Some(6),
        abilities: Some("Dispara feixes de luz".to_string()),
        description: None,
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_class_parsing_is_strict() {
        assert_eq!("melee".parse::<WeaponClass>(), Ok(WeaponClass::Melee));
        assert_eq!("Rogue".parse::<WeaponClass>(), Ok(WeaponClass::Rogue));
        assert_eq!(
            "wizard".parse::<WeaponClass>(),
            Err(InvalidWeaponClass("wizard".to_string()))
        );
        assert!("".parse::<WeaponClass>().is_err());
    }

    #[test]
    fn valid_request_passes() {
        let weapon = sample_request().validate(Element::Holy).unwrap();
        assert_eq!(weapon.name, "Excalibur");
        assert_eq!(weapon.weapon_class, WeaponClass::Melee);
        assert_eq!(weapon.element, Element::Holy);
        assert_eq!(weapon.rarity, 5);
    }

    #[test]
    fn element_is_taken_as_given() {
        let weapon = sample_request().validate(Element::Cosmic).unwrap();
        assert_eq!(weapon.element, Element::Cosmic);
    }

    #[test]
    fn unknown_weapon_class_is_rejected() {
        let mut request = sample_request();
        request.weapon_class = Some("wizard".to_string());
        let errors = request.validate(Element::Holy).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["weaponClass"]);
        assert!(errors.errors[0].message.contains("invalid value"));
    }

    #[test]
    fn field_errors_are_collected_independently() {
        let request = WeaponRequest {
            name: Some("  ".to_string()),
            critical_chance: Some(21),
            attacks_per_turn: Some(0.5),
            rarity: Some(18),
            quality: Some(-1),
            ..sample_request()
        };
        let errors = request.validate(Element::Holy).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["name", "criticalChance", "attacksPerTurn", "rarity", "quality"]
        );
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        let request = WeaponRequest {
            base_damage: Some(1),
            critical_chance: Some(20),
            attacks_per_turn: Some(1.0),
            range: Some(0),
            rarity: Some(-1),
            price: Some(0),
            quality: Some(10),
            ..sample_request()
        };
        assert!(request.validate(Element::Holy).is_ok());
    }

    #[test]
    fn missing_fields_are_reported() {
        let errors = WeaponRequest::default()
            .validate(Element::Neutral)
            .unwrap_err();
        assert_eq!(errors.errors.len(), 9);
        assert!(errors.errors.iter().all(|e| e.field == "name"
            || e.message == "must be provided"));
    }
}

use super::element_service::{is_calamity, is_supreme, is_vanilla};
use crate::structs::element_struct::Element;

/// Multipliers are kept in tenths so damage can be scaled exactly.
struct BonusRule {
    applies: fn(Element) -> bool,
    tenths: i64,
}

// Evaluated top-down, first match wins: GOD_SLAYER is both calamity and
// supreme and must land on the supreme multiplier.
const BONUS_RULES: [BonusRule; 3] = [
    BonusRule {
        applies: is_supreme,
        tenths: 25,
    },
    BonusRule {
        applies: is_calamity,
        tenths: 15,
    },
    BonusRule {
        applies: is_vanilla,
        tenths: 12,
    },
];

const NO_BONUS_TENTHS: i64 = 10;

struct LevelGate {
    min_level: u32,
    allows: fn(Element) -> bool,
}

fn supreme_or_calamity(element: Element) -> bool {
    is_supreme(element) || is_calamity(element)
}

fn not_neutral(element: Element) -> bool {
    element != Element::Neutral
}

// Highest threshold first. Each gate's predicate implies the next one's,
// which keeps suitability monotonic in the level.
const LEVEL_GATES: [LevelGate; 3] = [
    LevelGate {
        min_level: 10,
        allows: is_supreme,
    },
    LevelGate {
        min_level: 7,
        allows: supreme_or_calamity,
    },
    LevelGate {
        min_level: 1,
        allows: not_neutral,
    },
];

fn bonus_tenths(element: Element) -> i64 {
    BONUS_RULES
        .iter()
        .find(|rule| (rule.applies)(element))
        .map_or(NO_BONUS_TENTHS, |rule| rule.tenths)
}

pub fn bonus_multiplier(element: Element) -> f64 {
    bonus_tenths(element) as f64 / 10.0
}

/// Final damage after the element bonus, truncated toward zero.
pub fn apply_bonus(base_damage: i64, element: Element) -> i64 {
    base_damage.saturating_mul(bonus_tenths(element)) / 10
}

/// Bonus over base damage as a whole percentage, e.g. "150%".
pub fn bonus_percentage(element: Element) -> String {
    format!("{}%", (bonus_tenths(element) - NO_BONUS_TENTHS) * 10)
}

pub fn are_compatible(first: Element, second: Element) -> bool {
    if is_supreme(first) || is_supreme(second) {
        return true;
    }
    (is_vanilla(first) && is_vanilla(second)) || (is_calamity(first) && is_calamity(second))
}

pub fn is_suitable_for_level(element: Element, boss_level: u32) -> bool {
    LEVEL_GATES
        .iter()
        .find(|gate| boss_level >= gate.min_level)
        .map_or(true, |gate| (gate.allows)(element))
}

/// An element that actually does something: not NEUTRAL and carrying an effect.
pub fn has_valid_element(element: Element) -> bool {
    element != Element::Neutral && element.has_effect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_by_group() {
        assert_eq!(bonus_multiplier(Element::Fire), 1.2);
        assert_eq!(bonus_multiplier(Element::Brimstone), 1.5);
        assert_eq!(bonus_multiplier(Element::Cosmic), 2.5);
        assert_eq!(bonus_multiplier(Element::Neutral), 1.0);
        assert_eq!(bonus_multiplier(Element::Shadow), 1.0);
    }

    #[test]
    fn supreme_wins_over_other_groups() {
        for element in Element::all() {
            let multiplier = bonus_multiplier(element);
            assert!([1.0, 1.2, 1.5, 2.5].contains(&multiplier), "{}", element.name());
            if is_supreme(element) {
                assert_eq!(multiplier, 2.5, "{}", element.name());
            }
        }
        assert_eq!(bonus_multiplier(Element::GodSlayer), 2.5);
    }

    #[test]
    fn apply_bonus_truncates() {
        assert_eq!(apply_bonus(50, Element::Fire), 60);
        assert_eq!(apply_bonus(50, Element::GodSlayer), 125);
        assert_eq!(apply_bonus(50, Element::Neutral), 50);
        assert_eq!(apply_bonus(3, Element::Fire), 3);
        assert_eq!(apply_bonus(7, Element::Astral), 10);
        assert_eq!(apply_bonus(1, Element::Omni), 2);
        assert_eq!(apply_bonus(-3, Element::Astral), -4);
    }

    #[test]
    fn bonus_percentage_text() {
        assert_eq!(bonus_percentage(Element::Fire), "20%");
        assert_eq!(bonus_percentage(Element::Plague), "50%");
        assert_eq!(bonus_percentage(Element::Omni), "150%");
        assert_eq!(bonus_percentage(Element::Neutral), "0%");
    }

    #[test]
    fn compatibility_examples() {
        assert!(are_compatible(Element::Fire, Element::Ice));
        assert!(!are_compatible(Element::Fire, Element::Brimstone));
        assert!(are_compatible(Element::Brimstone, Element::Abyssal));
        assert!(!are_compatible(Element::Neutral, Element::Fire));
        assert!(!are_compatible(Element::Neutral, Element::Neutral));
        assert!(!are_compatible(Element::Shadow, Element::Shadow));
        for element in Element::all() {
            assert!(are_compatible(Element::Cosmic, element));
            assert!(are_compatible(Element::Neutral, Element::Omni));
        }
    }

    #[test]
    fn compatibility_is_symmetric() {
        for a in Element::all() {
            for b in Element::all() {
                assert_eq!(
                    are_compatible(a, b),
                    are_compatible(b, a),
                    "{} {}",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn suitability_examples() {
        assert!(!is_suitable_for_level(Element::Neutral, 5));
        assert!(is_suitable_for_level(Element::Fire, 5));
        assert!(!is_suitable_for_level(Element::Fire, 8));
        assert!(is_suitable_for_level(Element::Temporal, 8));
        assert!(!is_suitable_for_level(Element::Brimstone, 10));
        assert!(is_suitable_for_level(Element::GodSlayer, 10));
        assert!(is_suitable_for_level(Element::Neutral, 0));
    }

    #[test]
    fn suitability_is_monotonic() {
        for element in Element::all() {
            for level in 0..=20 {
                if is_suitable_for_level(element, level) {
                    assert!(
                        (0..level).all(|lower| is_suitable_for_level(element, lower)),
                        "{} at {}",
                        element.name(),
                        level
                    );
                }
            }
        }
    }

    #[test]
    fn valid_element_excludes_neutral() {
        assert!(!has_valid_element(Element::Neutral));
        assert!(has_valid_element(Element::Toxic));
    }
}

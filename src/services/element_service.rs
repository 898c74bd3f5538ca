use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::structs::element_struct::{Element, ELEMENT_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementGroup {
    Vanilla,
    Calamity,
    Supreme,
}

impl ElementGroup {
    const fn bit(self) -> u8 {
        match self {
            ElementGroup::Vanilla => 0b001,
            ElementGroup::Calamity => 0b010,
            ElementGroup::Supreme => 0b100,
        }
    }

    /// `None` stands for "other": any unrecognized group means no filter.
    pub fn parse(group: &str) -> Option<ElementGroup> {
        match group.to_lowercase().as_str() {
            "vanilla" => Some(ElementGroup::Vanilla),
            "calamity" => Some(ElementGroup::Calamity),
            "supreme" => Some(ElementGroup::Supreme),
            _ => None,
        }
    }

    pub fn contains(self, element: Element) -> bool {
        GROUPS[element as usize] & self.bit() != 0
    }

    pub fn members(self) -> impl Iterator<Item = Element> {
        Element::all().filter(move |e| self.contains(*e))
    }
}

const VANILLA: &[Element] = &[
    Element::Fire,
    Element::Ice,
    Element::Lightning,
    Element::Earth,
    Element::Water,
    Element::Wind,
    Element::Nature,
    Element::Holy,
    Element::Magic,
];

// TEMPORAL and ABYSSAL sit here even though the catalog presents them as
// special elements; GOD_SLAYER is also supreme.
const CALAMITY: &[Element] = &[
    Element::Brimstone,
    Element::HolyFlames,
    Element::Shadowflame,
    Element::Astral,
    Element::Plague,
    Element::GodSlayer,
    Element::Sulphuric,
    Element::Temporal,
    Element::Abyssal,
];

const SUPREME: &[Element] = &[Element::Cosmic, Element::Omni, Element::GodSlayer];

static GROUPS: Lazy<[u8; ELEMENT_COUNT]> = Lazy::new(|| {
    let mut table = [0u8; ELEMENT_COUNT];
    for (group, members) in [
        (ElementGroup::Vanilla, VANILLA),
        (ElementGroup::Calamity, CALAMITY),
        (ElementGroup::Supreme, SUPREME),
    ] {
        for element in members {
            table[*element as usize] |= group.bit();
        }
    }
    table
});

static BY_NAME: Lazy<HashMap<&'static str, Element>> =
    Lazy::new(|| Element::all().map(|e| (e.name(), e)).collect());

pub fn is_vanilla(element: Element) -> bool {
    ElementGroup::Vanilla.contains(element)
}

pub fn is_calamity(element: Element) -> bool {
    ElementGroup::Calamity.contains(element)
}

pub fn is_supreme(element: Element) -> bool {
    ElementGroup::Supreme.contains(element)
}

fn lookup(label: &str) -> Option<Element> {
    BY_NAME.get(label.to_uppercase().as_str()).copied()
}

/// Resolves a client supplied label to an element.
///
/// Matching is case-insensitive against the canonical names. Missing, blank
/// or unknown labels all resolve to `Element::Neutral`; this never fails, so
/// callers cannot tell an explicit "NEUTRAL" from garbage through this
/// function alone (see `is_recognized`).
pub fn resolve(label: Option<&str>) -> Element {
    match label {
        None => Element::Neutral,
        Some(label) if label.trim().is_empty() => Element::Neutral,
        Some(label) => lookup(label).unwrap_or_else(|| {
            tracing::debug!(label, "unknown element label, falling back to NEUTRAL");
            Element::Neutral
        }),
    }
}

/// Whether `label` names a real element, as opposed to resolving to
/// NEUTRAL through the fallback.
pub fn is_recognized(label: Option<&str>) -> bool {
    label.and_then(lookup).is_some()
}

//! Damage calculation - the numeric pieces of damage resolution
//!
//! Pure functions; [`super::Damage::resolve`] wires them together.

use crate::element::{Element, ReactionType};

/// Defense mitigation factor from the attacker's level and the victim's
/// derived DEF.
pub fn defense_multiplier(attacker_level: u32, victim_def: i32) -> f64 {
    let scaled = (attacker_level as f64 + 100.0) * 5.0;
    scaled / (scaled + victim_def as f64)
}

/// Amplifying reaction bonus, including the elemental mastery correction.
///
/// The base multiplier is directional: the same pair amplifies differently
/// depending on which element is attacking.
pub fn amplifying_bonus(attack: Element, attached: Element, elemental_mastery: i32) -> f64 {
    let base = match (attack, attached) {
        (Element::Pyro, Element::Hydro) => 1.5,
        (Element::Hydro, Element::Pyro) => 2.0,
        (Element::Pyro, Element::Cryo) => 2.0,
        (Element::Cryo, Element::Pyro) => 1.5,
        _ => 1.0,
    };

    let em = elemental_mastery as f64;
    base * (1.0 + 2.78 * em / (em + 1400.0))
}

/// Level-scaled base value of a transformative secondary hit.
///
/// Cubic fit over the attacker level; replaces the base-ATK formula
/// entirely for secondary damage.
pub fn transformative_level_value(attacker_level: u32) -> f64 {
    let l = attacker_level as f64;
    18.2876719441606 + 1.84879588278956 * l + 0.00930630666087628 * l * l
        + 0.00163265442032016 * l * l * l
}

/// Fixed per-reaction multiplier of a transformative secondary hit
pub fn transformative_multiplier(reaction: ReactionType) -> f64 {
    match reaction {
        ReactionType::ElectroCharged => 1.2,
        ReactionType::Overloaded => 2.0,
        ReactionType::Shattered => 1.5,
        ReactionType::Superconduct => 0.5,
        ReactionType::Swirl => 0.6,
        _ => 1.0,
    }
}

/// Elemental mastery bonus of a transformative secondary hit
pub fn transformative_mastery_bonus(elemental_mastery: i32) -> f64 {
    let em = elemental_mastery as f64;
    1.0 + 16.0 * em / (em + 2000.0)
}

/// Resistance mitigation factor.
///
/// Piecewise: negative resistance amplifies at half rate, resistance below
/// 0.75 mitigates linearly, and higher resistance decays hyperbolically so
/// immunity is never reached.
pub fn resistance_multiplier(res: f64) -> f64 {
    if res < 0.0 {
        1.0 - res / 2.0
    } else if res < 0.75 {
        1.0 - res
    } else {
        1.0 / (1.0 + 4.0 * res)
    }
}

//! Elemental reaction classification
//!
//! A reaction is a property of the unordered pair {attack element, attached
//! element}: `classify(a, b) == classify(b, a)` always. Direction only
//! matters later, when the damage formula picks the amplifying multiplier.

use super::Element;
use serde::{Deserialize, Serialize};

/// The reaction triggered by an element pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    #[default]
    None,
    Bloom,
    Burning,
    Catalyze,
    Crystallize,
    ElectroCharged,
    Frozen,
    Melt,
    Overloaded,
    Shattered,
    Superconduct,
    Swirl,
    Vaporize,
}

/// How a reaction participates in the damage formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionGroup {
    /// No formula branch triggers; the reaction is informational only
    #[default]
    None,
    /// Multiplies the direct hit (melt, vaporize)
    Amplifying,
    /// Produces an independent secondary damage event
    Transformative,
    /// The damage event is itself the derived secondary hit
    TransformativeSecondary,
}

impl ReactionType {
    /// The group this reaction belongs to when it triggers on a primary hit
    pub fn group(self) -> ReactionGroup {
        match self {
            ReactionType::ElectroCharged
            | ReactionType::Overloaded
            | ReactionType::Shattered
            | ReactionType::Superconduct
            | ReactionType::Swirl => ReactionGroup::Transformative,
            ReactionType::Melt | ReactionType::Vaporize => ReactionGroup::Amplifying,
            _ => ReactionGroup::None,
        }
    }
}

/// Resolve the reaction of one damage event.
///
/// A non-swirl secondary hit carries no further reaction of its own, and
/// any secondary hit resolves to the transformative-secondary group (it
/// represents an already-resolved follow-on).
pub fn resolve_reaction(
    attack: Element,
    attached: Element,
    is_secondary: bool,
    is_secondary_swirl: bool,
) -> (ReactionType, ReactionGroup) {
    let reaction = if is_secondary && !is_secondary_swirl {
        ReactionType::None
    } else {
        classify(attack, attached)
    };

    let group = if is_secondary {
        ReactionGroup::TransformativeSecondary
    } else {
        reaction.group()
    };

    (reaction, group)
}

/// Classify the reaction of an unordered element pair.
pub fn classify(attack: Element, attached: Element) -> ReactionType {
    match pair(attack, attached) {
        (Element::Hydro, Element::Dendro) => ReactionType::Bloom,
        (Element::Pyro, Element::Dendro) => ReactionType::Burning,
        (Element::Dendro, Element::Electro) => ReactionType::Catalyze,
        (Element::Pyro, Element::Geo)
        | (Element::Hydro, Element::Geo)
        | (Element::Electro, Element::Geo)
        | (Element::Cryo, Element::Geo) => ReactionType::Crystallize,
        (Element::Hydro, Element::Electro) => ReactionType::ElectroCharged,
        (Element::Hydro, Element::Cryo) => ReactionType::Frozen,
        (Element::Pyro, Element::Cryo) => ReactionType::Melt,
        (Element::Pyro, Element::Electro) => ReactionType::Overloaded,
        (Element::Electro, Element::Cryo) => ReactionType::Superconduct,
        (Element::Pyro, Element::Anemo)
        | (Element::Hydro, Element::Anemo)
        | (Element::Electro, Element::Anemo)
        | (Element::Cryo, Element::Anemo) => ReactionType::Swirl,
        (Element::Pyro, Element::Hydro) => ReactionType::Vaporize,
        _ => ReactionType::None,
    }
}

// Canonical ordering of a pair so each rule is written once.
fn pair(a: Element, b: Element) -> (Element, Element) {
    fn rank(e: Element) -> u8 {
        match e {
            Element::Physical => 0,
            Element::Pyro => 1,
            Element::Hydro => 2,
            Element::Dendro => 3,
            Element::Electro => 4,
            Element::Anemo => 5,
            Element::Cryo => 6,
            Element::Geo => 7,
        }
    }
    if rank(a) <= rank(b) {
        (a, b)
    } else {
        (b, a)
    }
}

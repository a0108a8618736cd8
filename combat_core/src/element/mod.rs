//! Element - the eight damage element types and their reactions

pub mod reaction;

pub use reaction::{classify, resolve_reaction, ReactionGroup, ReactionType};

use serde::{Deserialize, Serialize};

/// The element carried by an attack or attached to a victim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    #[default]
    Physical,
    Pyro,
    Hydro,
    Dendro,
    Electro,
    Anemo,
    Cryo,
    Geo,
}

impl Element {
    /// Get all element types
    pub fn all() -> &'static [Element] {
        &[
            Element::Physical,
            Element::Pyro,
            Element::Hydro,
            Element::Dendro,
            Element::Electro,
            Element::Anemo,
            Element::Cryo,
            Element::Geo,
        ]
    }
}

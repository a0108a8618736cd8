//! combat_core - Combat math and progression core for an RPG overlay
//!
//! This library provides:
//! - Attributes: Aggregated combat attributes from multiple sources
//! - Damage: Elemental damage resolution with reactions and secondary hits
//! - Progression: EXP curves and stat scaling for characters, weapons and
//!   artifacts
//! - Modifier: Transient buffs/debuffs with caller-owned identifiers
//!
//! The core is pure computation: all randomness (crit rolls, artifact
//! stats) flows through an explicitly injected RNG, and every wrong-shape
//! access fails fast with a typed error.

pub mod attributes;
pub mod config;
pub mod damage;
pub mod element;
pub mod modifier;
pub mod progression;
pub mod types;

// Re-export core types for convenience
pub use attributes::{Attributes, PrimaryStat};
pub use config::{default_characters, default_weapons, CharacterRegistry, WeaponRegistry};
pub use damage::{Damage, DamageError, SourceType};
pub use element::{classify, resolve_reaction, Element, ReactionGroup, ReactionType};
pub use modifier::{Modifier, ModifierError, ModifierId, ModifierIdAllocator, ModifierPayload};
pub use progression::{
    Artifact, ArtifactData, Character, CharacterData, CharacterRecord, ProgressionCurve,
    ProgressionError, StatRoll, Weapon, WeaponData, WeaponRecord, WeaponSubStat,
};
pub use types::{ArtifactSlot, StatKind};

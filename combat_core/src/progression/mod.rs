//! Progression - experience curves and per-entity-kind stat scaling
//!
//! Levels are never stored: an entity keeps its accumulated experience and
//! its ascension phase, and the level is derived on demand from a
//! threshold table, clamped to the phase's ceiling.

pub mod artifact;
pub mod character;
pub mod weapon;

pub use artifact::{Artifact, ArtifactData, StatRoll};
pub use character::{Character, CharacterData, CharacterRecord};
pub use weapon::{Weapon, WeaponData, WeaponRecord, WeaponSubStat};

use thiserror::Error;

/// Experience value marking a level that cannot be reached at a given
/// rarity. Larger than any legitimate threshold.
pub const UNREACHABLE_EXP: i64 = 999_999;

/// Progression construction and lookup failures.
///
/// All of these indicate caller bugs (out-of-range stored data, an
/// identifier missing from the record registry); none are recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("invalid entity data: {0}")]
    InvalidEntityData(String),
    #[error("unknown character identifier: {0}")]
    UnknownCharacter(String),
    #[error("unknown weapon identifier: {0}")]
    UnknownWeapon(String),
}

/// An ordered experience-threshold table.
///
/// `thresholds[level]` is the minimum cumulative experience of `level`;
/// index 0 is unused and holds 0 by convention. Thresholds are
/// non-decreasing, so the level of an experience value is the greatest
/// index whose threshold does not exceed it.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionCurve {
    thresholds: &'static [i64],
}

impl ProgressionCurve {
    pub const fn new(thresholds: &'static [i64]) -> Self {
        ProgressionCurve { thresholds }
    }

    /// Greatest level whose threshold is at or below `experience`
    pub fn level_for(&self, experience: i64) -> u32 {
        let idx = self.thresholds.partition_point(|&t| t <= experience);
        idx.saturating_sub(1) as u32
    }

    /// Level lookup clamped to an ascension (or rarity) ceiling
    pub fn capped_level_for(&self, experience: i64, cap: u32) -> u32 {
        self.level_for(experience).min(cap)
    }

    /// Highest level the table describes
    pub fn max_level(&self) -> u32 {
        (self.thresholds.len() - 1) as u32
    }
}

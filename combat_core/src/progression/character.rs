//! Character progression - level curve and stat scaling
//!
//! Concrete characters are data, not types: a [`CharacterRecord`] carries
//! the growth tables a named character would otherwise hard-code, and the
//! registry in [`crate::config`] resolves identifiers to records.

use super::{ProgressionCurve, ProgressionError};
use crate::attributes::Attributes;
use crate::element::Element;
use crate::modifier::Modifier;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Minimum cumulative character EXP of each level, 1-90. Index 0 unused.
static LEVEL_MIN_EXP: [i64; 91] = [
    0, 0, 1000, 2325, 4025, 6175, 8800, 11950, 15675, 20025, 25025, 30725, 37175, 44400, 52450,
    61375, 71200, 81950, 93675, 106400, 120175, 135050, 151850, 169850, 189100, 209650, 231525,
    254775, 279425, 305525, 333100, 362200, 392850, 425100, 458975, 494525, 531775, 570750, 611500,
    654075, 698500, 744800, 795425, 848125, 902900, 959800, 1018875, 1080150, 1143675, 1209475,
    1277600, 1348075, 1424575, 1503625, 1585275, 1669550, 1756500, 1846150, 1938550, 2033725,
    2131725, 2232600, 2341550, 2453600, 2568775, 2687100, 2808625, 2933400, 3061475, 3192875,
    3327650, 3465825, 3614525, 3766900, 3922975, 4082800, 4246400, 4413825, 4585125, 4760350,
    4939525, 5122700, 5338925, 5581950, 5855050, 6161850, 6506450, 6893400, 7327825, 7815450,
    8362650,
];

/// Max level of each ascension phase, 0-6
static ASCENSION_PHASE_MAX_LEVEL: [u32; 7] = [20, 40, 50, 60, 70, 80, 90];

static CURVE: ProgressionCurve = ProgressionCurve::new(&LEVEL_MIN_EXP);

// Baseline stats every character carries regardless of equipment.
const BASE_CRIT_RATE: f64 = 0.05;
const BASE_CRIT_DMG: f64 = 0.5;
const BASE_ENERGY_RECHARGE: f64 = 1.0;

/// Growth tables of one concrete character, keyed by a stable identifier.
///
/// Primary stats scale as `base[phase] + diff * level`; the ascension
/// stat is a phase-indexed bonus in display units (percent points for
/// percent kinds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub rarity: u8,
    pub element: Element,
    pub hp_base: [i32; 7],
    pub hp_diff: i32,
    pub atk_base: [i32; 7],
    pub atk_diff: i32,
    pub def_base: [i32; 7],
    pub def_diff: i32,
    pub ascension_stat: StatKind,
    pub ascension_stat_values: [f64; 7],
}

impl CharacterRecord {
    /// Level-scaled base attribute block at the given phase and level
    pub fn base_stats(&self, ascension_phase: u8, level: u32) -> Attributes {
        let phase = ascension_phase as usize;
        let mut stats = Attributes::new();

        stats.max_hp.base = self.hp_base[phase] + self.hp_diff * level as i32;
        stats.atk.base = self.atk_base[phase] + self.atk_diff * level as i32;
        stats.def.base = self.def_base[phase] + self.def_diff * level as i32;
        stats.apply(self.ascension_stat, self.ascension_stat_values[phase]);

        stats
    }
}

/// Stored character state, as supplied by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    pub ascension_phase: u8,
    pub exp: i64,
    pub constellation: u8,
    pub energy: i32,
    pub hp: i32,
    pub talent_normal_attack: u8,
    pub talent_elemental_skill: u8,
    pub talent_elemental_burst: u8,
}

/// One owned character: growth record plus validated live state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    record: CharacterRecord,
    data: CharacterData,
    #[serde(default)]
    modifiers: Vec<Modifier>,
}

impl Character {
    /// Build a character from its record and stored state.
    ///
    /// Fails fast on out-of-range data rather than clamping it.
    pub fn new(record: CharacterRecord, data: CharacterData) -> Result<Self, ProgressionError> {
        if data.ascension_phase > 6 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "ascension phase {} out of range 0-6",
                data.ascension_phase
            )));
        }
        if data.exp < 0 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "negative character EXP {}",
                data.exp
            )));
        }
        if data.constellation > 6 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "constellation {} out of range 0-6",
                data.constellation
            )));
        }
        if data.energy < 0 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "negative energy {}",
                data.energy
            )));
        }
        if data.hp < 0 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "negative HP {}",
                data.hp
            )));
        }
        for (name, level) in [
            ("normal attack", data.talent_normal_attack),
            ("elemental skill", data.talent_elemental_skill),
            ("elemental burst", data.talent_elemental_burst),
        ] {
            if level > 10 {
                return Err(ProgressionError::InvalidEntityData(format!(
                    "{} talent level {} out of range 0-10",
                    name, level
                )));
            }
        }

        Ok(Character {
            record,
            data,
            modifiers: Vec::new(),
        })
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    pub fn data(&self) -> &CharacterData {
        &self.data
    }

    pub fn ascension_phase(&self) -> u8 {
        self.data.ascension_phase
    }

    pub fn exp(&self) -> i64 {
        self.data.exp
    }

    /// Current level: derived from EXP, clamped by the ascension phase
    pub fn level(&self) -> u32 {
        self.level_by_exp(self.data.exp)
    }

    /// Level a given EXP amount would yield at the current phase
    pub fn level_by_exp(&self, exp: i64) -> u32 {
        CURVE.capped_level_for(exp, self.max_level())
    }

    /// Level ceiling of the current ascension phase
    pub fn max_level(&self) -> u32 {
        ASCENSION_PHASE_MAX_LEVEL[self.data.ascension_phase as usize]
    }

    /// Add experience. Negative grants are ignored.
    pub fn gain_exp(&mut self, amount: i64) {
        self.data.exp += amount.max(0);
    }

    /// Advance one ascension phase, once the current ceiling is reached.
    ///
    /// Returns whether the phase advanced. Material consumption is the
    /// inventory layer's concern.
    pub fn ascend(&mut self) -> bool {
        if self.data.ascension_phase >= 6 || self.level() < self.max_level() {
            return false;
        }
        self.data.ascension_phase += 1;
        true
    }

    /// Attach a buff/debuff modifier
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    /// Remove the modifier with the given ID, if attached
    pub fn remove_modifier(&mut self, id: crate::modifier::ModifierId) {
        self.modifiers.retain(|m| m.id() != id);
    }

    /// Drop all modifiers whose expiry clock has passed
    pub fn purge_expired_modifiers(&mut self, now: f64) {
        self.modifiers.retain(|m| !m.is_expired(now));
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// The character's own level-scaled attribute block
    pub fn base_stats(&self) -> Attributes {
        self.record.base_stats(self.data.ascension_phase, self.level())
    }

    /// Full attribute block: own growth, equipment contributions, the
    /// baseline constants, and attached attribute modifiers.
    pub fn stats(&self, equipment: &[Attributes]) -> Attributes {
        let mut stats = self.base_stats();

        for contribution in equipment {
            stats += *contribution;
        }

        stats.crit_rate += BASE_CRIT_RATE;
        stats.crit_dmg += BASE_CRIT_DMG;
        stats.energy_recharge += BASE_ENERGY_RECHARGE;

        for modifier in &self.modifiers {
            if let Ok(attrs) = modifier.attributes() {
                stats += *attrs;
            }
        }

        stats
    }
}

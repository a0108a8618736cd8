//! Weapon progression - rarity-keyed level curves and ATK scaling
//!
//! Rarity decides everything here: which EXP table applies, how many
//! ascension phases exist (1-2 star weapons stop at phase 4 / level 70),
//! and how many entries the per-phase ATK table must carry.

use super::{ProgressionCurve, ProgressionError};
use crate::attributes::Attributes;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Minimum cumulative weapon EXP of each level for 1-star weapons, 1-70
static ONE_STAR_LEVEL_MIN_EXP: [i64; 71] = [
    0, 0, 125, 325, 600, 950, 1425, 2000, 2700, 3550, 4550, 5700, 7000, 8475, 10125, 11975, 14025,
    16275, 18725, 21400, 24325, 27475, 31050, 34875, 38975, 43375, 48075, 53075, 58375, 63975,
    69900, 76175, 82775, 89725, 97050, 104725, 112775, 121200, 130025, 139250, 148875, 158900,
    169875, 181300, 193175, 205525, 218350, 231650, 245425, 259700, 274500, 289800, 306425, 323600,
    341325, 359625, 378500, 397975, 418050, 438725, 460025, 481950, 505625, 529975, 555000, 580700,
    607100, 634225, 662050, 690600, 719875,
];

/// Minimum cumulative weapon EXP of each level for 2-star weapons, 1-70
static TWO_STAR_LEVEL_MIN_EXP: [i64; 71] = [
    0, 0, 175, 450, 850, 1400, 2100, 2975, 4025, 5275, 6750, 8450, 10400, 12625, 15100, 17875,
    20925, 24300, 28000, 32025, 36400, 41125, 46475, 52225, 58400, 65000, 72025, 79500, 87450,
    95875, 104775, 114175, 124075, 134525, 145500, 157025, 169100, 181750, 194975, 208800, 223225,
    238275, 254725, 271850, 289675, 308200, 327425, 347375, 368050, 389475, 411650, 434600, 459525,
    485275, 511875, 539325, 567650, 596875, 626975, 658000, 689950, 722825, 758325, 794825, 832350,
    870925, 910525, 951200, 992950, 1035775, 1079675,
];

/// Minimum cumulative weapon EXP of each level for 3-star weapons, 1-90
static THREE_STAR_LEVEL_MIN_EXP: [i64; 91] = [
    0, 0, 275, 700, 1300, 2100, 3125, 4400, 5950, 7800, 9975, 12475, 15350, 18600, 22250, 26300,
    30800, 35750, 41150, 47050, 53475, 60400, 68250, 76675, 85725, 95400, 105725, 116700, 128350,
    140700, 153750, 167550, 182075, 197375, 213475, 230375, 248075, 266625, 286025, 306300, 327475,
    349525, 373675, 398800, 424925, 452075, 480275, 509525, 539850, 571275, 603825, 637475, 674025,
    711800, 750800, 791075, 832625, 875475, 919625, 965125, 1011975, 1060200, 1112275, 1165825,
    1220875, 1277425, 1335525, 1395175, 1456400, 1519200, 1583600, 1649625, 1720700, 1793525,
    1868100, 1944450, 2022600, 2102600, 2184450, 2268150, 2353725, 2441225, 2544500, 2660575,
    2791000, 2937500, 3102050, 3286825, 3494225, 3727000, 3988200,
];

/// Minimum cumulative weapon EXP of each level for 4-star weapons, 1-90
static FOUR_STAR_LEVEL_MIN_EXP: [i64; 91] = [
    0, 0, 400, 1025, 1925, 3125, 4675, 6625, 8975, 11775, 15075, 18875, 23225, 28150, 33675, 39825,
    46625, 54125, 62325, 71275, 81000, 91500, 103400, 116175, 129875, 144525, 160150, 176775,
    194425, 213125, 232900, 253800, 275825, 299025, 323400, 349000, 375825, 403925, 433325, 464050,
    496125, 529550, 566125, 604200, 643800, 684950, 727675, 772000, 817950, 865550, 914850, 965850,
    1021225, 1078450, 1137550, 1198575, 1261525, 1326450, 1393350, 1462275, 1533250, 1606300,
    1685200, 1766325, 1849725, 1935425, 2023450, 2113825, 2206575, 2301725, 2399300, 2499350,
    2607025, 2717350, 2830350, 2946050, 3064475, 3185675, 3309675, 3436500, 3566175, 3698750,
    3855225, 4031100, 4228700, 4450675, 4699975, 4979925, 5294175, 5646875, 6042650,
];

/// Minimum cumulative weapon EXP of each level for 5-star weapons, 1-90
static FIVE_STAR_LEVEL_MIN_EXP: [i64; 91] = [
    0, 0, 600, 1550, 2900, 4700, 7025, 9950, 13475, 17675, 22625, 28325, 34850, 42250, 50550,
    59775, 69975, 81225, 93525, 106950, 121550, 137300, 155150, 174325, 194875, 216850, 240300,
    265250, 291725, 319775, 349450, 380800, 413850, 448650, 485225, 523625, 563875, 606025, 650125,
    696225, 744350, 794500, 849375, 906500, 965900, 1027625, 1091725, 1158225, 1227150, 1298550,
    1372500, 1449000, 1532075, 1617925, 1706575, 1798125, 1892550, 1989950, 2090300, 2193700,
    2300175, 2409750, 2528100, 2649800, 2774900, 2903450, 3035500, 3171075, 3310200, 3452925,
    3599300, 3749375, 3910900, 4076400, 4245900, 4419450, 4597100, 4778900, 4964900, 5155150,
    5349675, 5548550, 5783275, 6047100, 6343500, 6676475, 7050425, 7470350, 7941725, 8470775,
    9064450,
];

/// Max level of each ascension phase for 3-5 star weapons, phases 0-6
static HIGH_RARITY_PHASE_MAX_LEVEL: [u32; 7] = [20, 40, 50, 60, 70, 80, 90];

/// Max level of each ascension phase for 1-2 star weapons, phases 0-4
static LOW_RARITY_PHASE_MAX_LEVEL: [u32; 5] = [20, 40, 50, 60, 70];

/// Highest ascension phase a weapon of the given rarity can reach
pub fn max_ascension_phase(rarity: u8) -> u8 {
    if rarity <= 2 {
        4
    } else {
        6
    }
}

fn curve(rarity: u8) -> ProgressionCurve {
    match rarity {
        1 => ProgressionCurve::new(&ONE_STAR_LEVEL_MIN_EXP),
        2 => ProgressionCurve::new(&TWO_STAR_LEVEL_MIN_EXP),
        3 => ProgressionCurve::new(&THREE_STAR_LEVEL_MIN_EXP),
        4 => ProgressionCurve::new(&FOUR_STAR_LEVEL_MIN_EXP),
        _ => ProgressionCurve::new(&FIVE_STAR_LEVEL_MIN_EXP),
    }
}

fn phase_max_level(rarity: u8, phase: u8) -> u32 {
    if rarity <= 2 {
        LOW_RARITY_PHASE_MAX_LEVEL[phase as usize]
    } else {
        HIGH_RARITY_PHASE_MAX_LEVEL[phase as usize]
    }
}

/// Fixed secondary stat of a weapon identity, in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSubStat {
    pub kind: StatKind,
    pub value: f64,
}

/// Growth tables of one concrete weapon, keyed by a stable identifier.
///
/// `atk_base` holds one inferred level-0 ATK per ascension phase, so its
/// length is 5 for 1-2 star weapons and 7 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub id: String,
    pub name: String,
    pub rarity: u8,
    pub atk_base: Vec<i32>,
    pub atk_diff: i32,
    #[serde(default)]
    pub sub_stat: Option<WeaponSubStat>,
}

/// Stored weapon state, as supplied by the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponData {
    pub exp: i64,
    pub ascension_phase: u8,
    pub refinement: u8,
}

/// One owned weapon: growth record plus validated live state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    record: WeaponRecord,
    data: WeaponData,
}

impl Weapon {
    /// Build a weapon from its record and stored state, failing fast on
    /// out-of-range data or a record whose tables do not fit its rarity.
    pub fn new(record: WeaponRecord, data: WeaponData) -> Result<Self, ProgressionError> {
        if !(1..=5).contains(&record.rarity) {
            return Err(ProgressionError::InvalidEntityData(format!(
                "weapon rarity {} out of range 1-5",
                record.rarity
            )));
        }
        let phases = max_ascension_phase(record.rarity) as usize + 1;
        if record.atk_base.len() != phases {
            return Err(ProgressionError::InvalidEntityData(format!(
                "weapon '{}' has {} ATK entries, rarity {} needs {}",
                record.id,
                record.atk_base.len(),
                record.rarity,
                phases
            )));
        }
        if data.ascension_phase > max_ascension_phase(record.rarity) {
            return Err(ProgressionError::InvalidEntityData(format!(
                "ascension phase {} out of range 0-{} for rarity {}",
                data.ascension_phase,
                max_ascension_phase(record.rarity),
                record.rarity
            )));
        }
        if data.exp < 0 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "negative weapon EXP {}",
                data.exp
            )));
        }
        if !(1..=5).contains(&data.refinement) {
            return Err(ProgressionError::InvalidEntityData(format!(
                "refinement {} out of range 1-5",
                data.refinement
            )));
        }

        Ok(Weapon { record, data })
    }

    pub fn record(&self) -> &WeaponRecord {
        &self.record
    }

    pub fn rarity(&self) -> u8 {
        self.record.rarity
    }

    pub fn ascension_phase(&self) -> u8 {
        self.data.ascension_phase
    }

    pub fn refinement(&self) -> u8 {
        self.data.refinement
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
        curve(self.record.rarity).capped_level_for(exp, self.max_level())
    }

    /// Level ceiling of the current ascension phase
    pub fn max_level(&self) -> u32 {
        phase_max_level(self.record.rarity, self.data.ascension_phase)
    }

    /// Add experience. Negative grants are ignored.
    pub fn gain_exp(&mut self, amount: i64) {
        self.data.exp += amount.max(0);
    }

    /// Advance one ascension phase once the current ceiling is reached.
    /// Returns whether the phase advanced.
    pub fn ascend(&mut self) -> bool {
        if self.data.ascension_phase >= max_ascension_phase(self.record.rarity)
            || self.level() < self.max_level()
        {
            return false;
        }
        self.data.ascension_phase += 1;
        true
    }

    /// Raise the refinement rank by one, up to rank 5.
    /// Returns whether the rank changed.
    pub fn refine(&mut self) -> bool {
        if self.data.refinement >= 5 {
            return false;
        }
        self.data.refinement += 1;
        true
    }

    /// The weapon's level-scaled attribute block
    pub fn base_stats(&self) -> Attributes {
        let mut stats = Attributes::new();
        stats.atk.base = self.record.atk_base[self.data.ascension_phase as usize]
            + self.record.atk_diff * self.level() as i32;
        if let Some(sub_stat) = self.record.sub_stat {
            stats.apply(sub_stat.kind, sub_stat.value);
        }
        stats
    }
}

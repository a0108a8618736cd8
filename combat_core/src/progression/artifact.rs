//! Artifact progression - rarity curves, randomized stats, enhancement
//!
//! An artifact's stats are rolled once at creation: the slot constrains
//! the main stat, and four distinct sub-stat kinds are drawn from a fixed
//! pool, with `rarity - 1` or `rarity - 2` of them receiving an initial
//! roll. Every level-up that crosses a multiple of 4 adds one more roll.
//! All randomness comes through the caller's RNG.

use super::{ProgressionCurve, ProgressionError, UNREACHABLE_EXP};
use crate::attributes::Attributes;
use crate::types::{ArtifactSlot, StatKind};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const U: i64 = UNREACHABLE_EXP;

/// Minimum cumulative artifact EXP of each level, per rarity 0-5.
/// Levels beyond the rarity's cap are sentinel-filled.
static LEVEL_MIN_EXP: [[i64; 21]; 6] = [
    [0; 21],
    [
        0, 600, 1350, 2225, 3250, U, U, U, U, U, U, U, U, U, U, U, U, U, U, U, U,
    ],
    [
        0, 1200, 2700, 4475, 6525, U, U, U, U, U, U, U, U, U, U, U, U, U, U, U, U,
    ],
    [
        0, 1800, 4025, 6675, 9775, 13325, 17325, 21825, 26825, 32350, 38425, 45050, 52275, U, U,
        U, U, U, U, U, U,
    ],
    [
        0, 2400, 5375, 8925, 13050, 17775, 23125, 29125, 35800, 43175, 51275, 60125, 69750, 80175,
        92300, 106375, 122675, U, U, U, U,
    ],
    [
        0, 3000, 6725, 11150, 16300, 22200, 28875, 36375, 44725, 53950, 64075, 75125, 87150,
        100175, 115325, 132925, 153300, 176800, 203850, 234900, 270475,
    ],
];

/// Level cap per rarity 0-5
static RARITY_MAX_LEVEL: [u32; 6] = [0, 4, 4, 12, 16, 20];

/// Artifact EXP granted when a fresh artifact of each rarity is consumed
/// as enhancement material
static RARITY_BASE_CONSUMABLE_EXP: [i64; 6] = [0, 420, 840, 1260, 2520, 3780];

/// The ten sub-stat kinds an artifact can roll
static SUB_STAT_POOL: [StatKind; 10] = [
    StatKind::Hp,
    StatKind::Atk,
    StatKind::Def,
    StatKind::HpPercent,
    StatKind::AtkPercent,
    StatKind::DefPercent,
    StatKind::ElementalMastery,
    StatKind::EnergyRecharge,
    StatKind::CritRate,
    StatKind::CritDmg,
];

/// Main-stat kinds a slot can roll. Flower and plume are fixed; the other
/// three slots choose uniformly.
pub fn main_stat_candidates(slot: ArtifactSlot) -> &'static [StatKind] {
    match slot {
        ArtifactSlot::FlowerOfLife => &[StatKind::Hp],
        ArtifactSlot::PlumeOfDeath => &[StatKind::Atk],
        ArtifactSlot::SandsOfEon => &[
            StatKind::HpPercent,
            StatKind::AtkPercent,
            StatKind::DefPercent,
            StatKind::ElementalMastery,
            StatKind::EnergyRecharge,
        ],
        ArtifactSlot::GobletOfEonothem => &[
            StatKind::HpPercent,
            StatKind::AtkPercent,
            StatKind::DefPercent,
            StatKind::ElementalMastery,
            StatKind::PyroDmgBonus,
            StatKind::HydroDmgBonus,
            StatKind::DendroDmgBonus,
            StatKind::ElectroDmgBonus,
            StatKind::AnemoDmgBonus,
            StatKind::CryoDmgBonus,
            StatKind::GeoDmgBonus,
            StatKind::PhysicalDmgBonus,
        ],
        ArtifactSlot::CircletOfLogos => &[
            StatKind::HpPercent,
            StatKind::AtkPercent,
            StatKind::DefPercent,
            StatKind::ElementalMastery,
            StatKind::CritRate,
            StatKind::CritDmg,
        ],
    }
}

/// Level-0 main-stat value per rarity and kind, in display units
pub fn main_stat_base(rarity: u8, kind: StatKind) -> f64 {
    match rarity {
        1 => match kind {
            StatKind::Hp => 129.0,
            StatKind::Atk => 8.0,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 3.9,
            StatKind::ElementalMastery => 12.6,
            StatKind::EnergyRecharge => 3.5,
            StatKind::CritRate => 2.1,
            StatKind::CritDmg => 4.2,
            StatKind::HealingBonus => 2.4,
            StatKind::Def => 0.0,
            _ => 3.1,
        },
        2 => match kind {
            StatKind::Hp => 258.0,
            StatKind::Atk => 17.0,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 5.2,
            StatKind::ElementalMastery => 16.8,
            StatKind::EnergyRecharge => 4.7,
            StatKind::CritRate => 2.8,
            StatKind::CritDmg => 5.6,
            StatKind::HealingBonus => 3.2,
            StatKind::Def => 0.0,
            _ => 4.2,
        },
        3 => match kind {
            StatKind::Hp => 430.0,
            StatKind::Atk => 28.0,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 6.6,
            StatKind::ElementalMastery => 21.0,
            StatKind::EnergyRecharge => 5.8,
            StatKind::CritRate => 3.5,
            StatKind::CritDmg => 7.0,
            StatKind::HealingBonus => 4.0,
            StatKind::Def => 0.0,
            _ => 5.2,
        },
        4 => match kind {
            StatKind::Hp => 645.0,
            StatKind::Atk => 42.0,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 7.9,
            StatKind::ElementalMastery => 25.2,
            StatKind::EnergyRecharge => 7.0,
            StatKind::CritRate => 4.2,
            StatKind::CritDmg => 8.4,
            StatKind::HealingBonus => 4.8,
            StatKind::Def => 0.0,
            _ => 6.3,
        },
        5 => match kind {
            StatKind::Hp => 717.0,
            StatKind::Atk => 47.0,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 8.7,
            StatKind::ElementalMastery => 28.0,
            StatKind::EnergyRecharge => 7.8,
            StatKind::CritRate => 4.7,
            StatKind::CritDmg => 9.3,
            StatKind::HealingBonus => 5.4,
            StatKind::Def => 0.0,
            _ => 7.0,
        },
        _ => 0.0,
    }
}

/// Per-level main-stat growth per rarity and kind, in display units
pub fn main_stat_diff(rarity: u8, kind: StatKind) -> f64 {
    match rarity {
        1 => match kind {
            StatKind::Hp => 48.75,
            StatKind::Atk => 3.25,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 1.5,
            StatKind::ElementalMastery => 4.75,
            StatKind::EnergyRecharge => 1.325,
            StatKind::CritRate => 0.8,
            StatKind::CritDmg => 1.575,
            StatKind::HealingBonus => 0.925,
            StatKind::Def => 0.0,
            _ => 1.2,
        },
        2 => match kind {
            StatKind::Hp => 73.25,
            StatKind::Atk => 4.75,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 1.5,
            StatKind::ElementalMastery => 4.75,
            StatKind::EnergyRecharge => 1.3,
            StatKind::CritRate => 0.8,
            StatKind::CritDmg => 1.575,
            StatKind::HealingBonus => 0.925,
            StatKind::Def => 0.0,
            _ => 1.2,
        },
        3 => match kind {
            StatKind::Hp => 121.917,
            StatKind::Atk => 7.917,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 1.850,
            StatKind::ElementalMastery => 5.942,
            StatKind::EnergyRecharge => 1.65,
            StatKind::CritRate => 0.992,
            StatKind::CritDmg => 1.983,
            StatKind::HealingBonus => 1.15,
            StatKind::Def => 0.0,
            _ => 1.492,
        },
        4 => match kind {
            StatKind::Hp => 182.875,
            StatKind::Atk => 11.875,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 2.225,
            StatKind::ElementalMastery => 7.131,
            StatKind::EnergyRecharge => 1.981,
            StatKind::CritRate => 1.188,
            StatKind::CritDmg => 2.375,
            StatKind::HealingBonus => 1.375,
            StatKind::Def => 0.0,
            _ => 1.781,
        },
        5 => match kind {
            StatKind::Hp => 203.15,
            StatKind::Atk => 13.2,
            StatKind::DefPercent | StatKind::PhysicalDmgBonus => 2.48,
            StatKind::ElementalMastery => 7.925,
            StatKind::EnergyRecharge => 2.2,
            StatKind::CritRate => 1.32,
            StatKind::CritDmg => 2.645,
            StatKind::HealingBonus => 1.525,
            StatKind::Def => 0.0,
            _ => 1.98,
        },
        _ => 0.0,
    }
}

/// Discrete roll values of a sub-stat kind per rarity, in display units
pub fn sub_stat_rolls(rarity: u8, kind: StatKind) -> &'static [f64] {
    match rarity {
        1 => match kind {
            StatKind::Hp => &[23.90, 29.88],
            StatKind::Atk => &[1.56, 1.95],
            StatKind::Def => &[1.85, 2.31],
            StatKind::HpPercent | StatKind::AtkPercent => &[1.17, 1.46],
            StatKind::DefPercent => &[1.46, 1.82],
            StatKind::ElementalMastery => &[4.66, 5.83],
            StatKind::EnergyRecharge => &[1.30, 1.62],
            StatKind::CritRate => &[0.78, 0.97],
            StatKind::CritDmg => &[1.55, 1.94],
            _ => &[],
        },
        2 => match kind {
            StatKind::Hp => &[50.19, 60.95, 71.70],
            StatKind::Atk => &[3.27, 3.97, 4.67],
            StatKind::Def => &[3.89, 4.72, 5.56],
            StatKind::HpPercent | StatKind::AtkPercent => &[1.63, 1.98, 2.33],
            StatKind::DefPercent => &[2.04, 2.48, 2.91],
            StatKind::ElementalMastery => &[6.53, 7.93, 9.33],
            StatKind::EnergyRecharge => &[1.81, 2.20, 2.59],
            StatKind::CritRate => &[1.09, 1.32, 1.55],
            StatKind::CritDmg => &[2.18, 2.64, 3.11],
            _ => &[],
        },
        3 => match kind {
            StatKind::Hp => &[100.38, 114.72, 129.06, 143.40],
            StatKind::Atk => &[6.54, 7.47, 8.40, 9.34],
            StatKind::Def => &[7.78, 8.89, 10.00, 11.11],
            StatKind::HpPercent | StatKind::AtkPercent => &[2.45, 2.80, 3.15, 3.50],
            StatKind::DefPercent => &[3.06, 3.50, 3.93, 4.37],
            StatKind::ElementalMastery => &[9.79, 11.19, 12.59, 13.99],
            StatKind::EnergyRecharge => &[2.72, 3.11, 3.50, 3.89],
            StatKind::CritRate => &[1.63, 1.86, 2.10, 2.33],
            StatKind::CritDmg => &[3.26, 3.73, 4.20, 4.66],
            _ => &[],
        },
        4 => match kind {
            StatKind::Hp => &[167.30, 191.20, 215.10, 239.00],
            StatKind::Atk => &[10.89, 12.45, 14.00, 15.56],
            StatKind::Def => &[12.96, 14.82, 16.67, 18.52],
            StatKind::HpPercent | StatKind::AtkPercent => &[3.26, 3.73, 4.20, 4.66],
            StatKind::DefPercent => &[4.08, 4.66, 5.25, 5.83],
            StatKind::ElementalMastery => &[13.06, 14.92, 16.79, 18.56],
            StatKind::EnergyRecharge => &[3.63, 4.14, 4.66, 5.18],
            StatKind::CritRate => &[2.18, 2.49, 2.80, 3.11],
            StatKind::CritDmg => &[4.35, 4.97, 5.60, 6.22],
            _ => &[],
        },
        5 => match kind {
            StatKind::Hp => &[209.13, 239.00, 268.88, 298.75],
            StatKind::Atk => &[13.62, 15.56, 17.51, 19.45],
            StatKind::Def => &[16.20, 18.52, 20.83, 23.15],
            StatKind::HpPercent | StatKind::AtkPercent => &[4.08, 4.66, 5.25, 5.83],
            StatKind::DefPercent => &[5.10, 5.83, 6.56, 7.29],
            StatKind::ElementalMastery => &[16.32, 18.65, 20.98, 23.31],
            StatKind::EnergyRecharge => &[4.53, 5.18, 5.83, 6.48],
            StatKind::CritRate => &[2.72, 3.11, 3.50, 3.89],
            StatKind::CritDmg => &[5.44, 6.22, 6.99, 7.77],
            _ => &[],
        },
        _ => &[],
    }
}

/// One rolled stat on an artifact, in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRoll {
    pub kind: StatKind,
    pub value: f64,
}

/// Stored artifact state, as supplied by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactData {
    pub exp: i64,
    pub main_stat: StatRoll,
    pub sub_stats: [StatRoll; 4],
}

/// One artifact piece with its rolled stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    slot: ArtifactSlot,
    rarity: u8,
    exp: i64,
    main_stat: StatRoll,
    sub_stats: [StatRoll; 4],
}

impl Artifact {
    /// Roll a fresh artifact of the given slot and rarity.
    pub fn generate(
        slot: ArtifactSlot,
        rarity: u8,
        rng: &mut impl Rng,
    ) -> Result<Self, ProgressionError> {
        check_rarity(rarity)?;

        let candidates = main_stat_candidates(slot);
        let kind = candidates[rng.gen_range(0..candidates.len())];
        let main_stat = StatRoll {
            kind,
            value: main_stat_base(rarity, kind),
        };

        // Distinct sub-stat kinds, never duplicating the main stat
        let mut pool: Vec<StatKind> = SUB_STAT_POOL
            .iter()
            .copied()
            .filter(|&k| k != kind)
            .collect();
        pool.shuffle(rng);

        let rolled = (rarity as i64 - rng.gen_range(1..=2)).max(0) as usize;
        let sub_stats: [StatRoll; 4] = std::array::from_fn(|i| {
            let kind = pool[i];
            let value = if i < rolled {
                random_roll(rarity, kind, rng)
            } else {
                0.0
            };
            StatRoll { kind, value }
        });

        Ok(Artifact {
            slot,
            rarity,
            exp: 0,
            main_stat,
            sub_stats,
        })
    }

    /// Rebuild an artifact from stored state, failing fast on data that
    /// generation could never have produced.
    pub fn new(
        slot: ArtifactSlot,
        rarity: u8,
        data: ArtifactData,
    ) -> Result<Self, ProgressionError> {
        check_rarity(rarity)?;

        if data.exp < 0 {
            return Err(ProgressionError::InvalidEntityData(format!(
                "negative artifact EXP {}",
                data.exp
            )));
        }
        if !main_stat_candidates(slot).contains(&data.main_stat.kind) {
            return Err(ProgressionError::InvalidEntityData(format!(
                "main stat {:?} is not valid for slot {:?}",
                data.main_stat.kind, slot
            )));
        }
        for (i, sub) in data.sub_stats.iter().enumerate() {
            if sub.kind == data.main_stat.kind {
                return Err(ProgressionError::InvalidEntityData(format!(
                    "sub stat {:?} duplicates the main stat",
                    sub.kind
                )));
            }
            if !SUB_STAT_POOL.contains(&sub.kind) {
                return Err(ProgressionError::InvalidEntityData(format!(
                    "{:?} is not a sub stat kind",
                    sub.kind
                )));
            }
            if data.sub_stats[..i].iter().any(|s| s.kind == sub.kind) {
                return Err(ProgressionError::InvalidEntityData(format!(
                    "duplicate sub stat {:?}",
                    sub.kind
                )));
            }
        }

        Ok(Artifact {
            slot,
            rarity,
            exp: data.exp,
            main_stat: data.main_stat,
            sub_stats: data.sub_stats,
        })
    }

    pub fn slot(&self) -> ArtifactSlot {
        self.slot
    }

    pub fn rarity(&self) -> u8 {
        self.rarity
    }

    pub fn exp(&self) -> i64 {
        self.exp
    }

    pub fn main_stat(&self) -> StatRoll {
        self.main_stat
    }

    pub fn sub_stats(&self) -> &[StatRoll; 4] {
        &self.sub_stats
    }

    /// Current enhancement level, 0 up to the rarity cap
    pub fn level(&self) -> u32 {
        ProgressionCurve::new(&LEVEL_MIN_EXP[self.rarity as usize])
            .capped_level_for(self.exp, self.max_level())
    }

    /// Level cap of this rarity
    pub fn max_level(&self) -> u32 {
        RARITY_MAX_LEVEL[self.rarity as usize]
    }

    /// Artifact EXP a fresh piece of this rarity is worth as material
    pub fn base_consumable_exp(&self) -> i64 {
        RARITY_BASE_CONSUMABLE_EXP[self.rarity as usize]
    }

    /// Add enhancement EXP.
    ///
    /// On a level-up the main stat is recomputed from its base/diff
    /// tables; when the new level crosses a multiple of 4 one sub-stat is
    /// enhanced — the first still-zero one if any remain, otherwise a
    /// uniformly random one. Grants at the level cap are ignored.
    pub fn gain_exp(&mut self, amount: i64, rng: &mut impl Rng) {
        if self.level() >= self.max_level() {
            return;
        }

        let previous_level = self.level();
        self.exp += amount.max(0);
        let level = self.level();

        if level > previous_level {
            self.main_stat.value = main_stat_base(self.rarity, self.main_stat.kind)
                + level as f64 * main_stat_diff(self.rarity, self.main_stat.kind);
        }

        if level % 4 == 0 && previous_level % 4 != 0 {
            for stat in self.sub_stats.iter_mut() {
                if stat.value < 1e-4 {
                    stat.value += random_roll(self.rarity, stat.kind, rng);
                    return;
                }
            }

            let stat = &mut self.sub_stats[rng.gen_range(0..4)];
            stat.value += random_roll(self.rarity, stat.kind, rng);
        }
    }

    /// The artifact's attribute block
    pub fn base_stats(&self) -> Attributes {
        let mut stats = Attributes::new();
        stats.apply(self.main_stat.kind, self.main_stat.value);
        for sub in &self.sub_stats {
            stats.apply(sub.kind, sub.value);
        }
        stats
    }
}

fn check_rarity(rarity: u8) -> Result<(), ProgressionError> {
    if !(1..=5).contains(&rarity) {
        return Err(ProgressionError::InvalidEntityData(format!(
            "artifact rarity {} out of range 1-5",
            rarity
        )));
    }
    Ok(())
}

fn random_roll(rarity: u8, kind: StatKind, rng: &mut impl Rng) -> f64 {
    let rolls = sub_stat_rolls(rarity, kind);
    if rolls.is_empty() {
        return 0.0;
    }
    rolls[rng.gen_range(0..rolls.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_generate_flower_has_flat_hp_main() {
        let artifact =
            Artifact::generate(ArtifactSlot::FlowerOfLife, 5, &mut rng(1)).unwrap();
        assert_eq!(artifact.main_stat().kind, StatKind::Hp);
        assert!((artifact.main_stat().value - 717.0).abs() < 1e-12);
        assert_eq!(artifact.level(), 0);
    }

    #[test]
    fn test_generate_sub_stats_are_distinct_and_exclude_main() {
        for seed in 0..32 {
            let artifact =
                Artifact::generate(ArtifactSlot::CircletOfLogos, 4, &mut rng(seed)).unwrap();
            let subs = artifact.sub_stats();
            for (i, sub) in subs.iter().enumerate() {
                assert_ne!(sub.kind, artifact.main_stat().kind);
                assert!(subs[..i].iter().all(|s| s.kind != sub.kind));
            }
        }
    }

    #[test]
    fn test_generate_initial_roll_count() {
        for seed in 0..32 {
            let artifact =
                Artifact::generate(ArtifactSlot::PlumeOfDeath, 5, &mut rng(seed)).unwrap();
            let rolled = artifact
                .sub_stats()
                .iter()
                .filter(|s| s.value > 0.0)
                .count();
            assert!(rolled == 3 || rolled == 4, "seed {seed}: {rolled}");
        }

        // Rarity 1 floors at zero rolls
        for seed in 0..32 {
            let artifact =
                Artifact::generate(ArtifactSlot::FlowerOfLife, 1, &mut rng(seed)).unwrap();
            let rolled = artifact
                .sub_stats()
                .iter()
                .filter(|s| s.value > 0.0)
                .count();
            assert_eq!(rolled, 0, "seed {seed}");
        }
    }

    #[test]
    fn test_generate_is_deterministic_under_a_fixed_seed() {
        let a = Artifact::generate(ArtifactSlot::SandsOfEon, 5, &mut rng(42)).unwrap();
        let b = Artifact::generate(ArtifactSlot::SandsOfEon, 5, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_bad_rarity() {
        assert!(Artifact::generate(ArtifactSlot::FlowerOfLife, 0, &mut rng(0)).is_err());
        assert!(Artifact::generate(ArtifactSlot::FlowerOfLife, 6, &mut rng(0)).is_err());
    }

    #[test]
    fn test_level_curve_and_cap() {
        let mut artifact =
            Artifact::generate(ArtifactSlot::FlowerOfLife, 1, &mut rng(3)).unwrap();
        assert_eq!(artifact.max_level(), 4);
        artifact.gain_exp(3250, &mut rng(4));
        assert_eq!(artifact.level(), 4);

        // Already capped: further grants are ignored
        let exp = artifact.exp();
        artifact.gain_exp(1_000_000, &mut rng(5));
        assert_eq!(artifact.exp(), exp);
        assert_eq!(artifact.level(), 4);
    }

    #[test]
    fn test_level_up_recomputes_main_stat() {
        let mut artifact =
            Artifact::generate(ArtifactSlot::PlumeOfDeath, 5, &mut rng(6)).unwrap();
        artifact.gain_exp(3000, &mut rng(7));
        assert_eq!(artifact.level(), 1);
        assert!((artifact.main_stat().value - (47.0 + 13.2)).abs() < 1e-12);
    }

    fn sub(kind: StatKind, value: f64) -> StatRoll {
        StatRoll { kind, value }
    }

    fn stored_three_star(exp: i64) -> Artifact {
        Artifact::new(
            ArtifactSlot::FlowerOfLife,
            3,
            ArtifactData {
                exp,
                main_stat: sub(StatKind::Hp, 430.0),
                sub_stats: [
                    sub(StatKind::ElementalMastery, 9.79),
                    sub(StatKind::CritRate, 0.0),
                    sub(StatKind::CritDmg, 0.0),
                    sub(StatKind::AtkPercent, 0.0),
                ],
            },
        )
        .unwrap()
    }

    #[test]
    fn test_enhancement_fills_the_first_zero_sub_stat() {
        // Level 3; the next level is a multiple of 4
        let mut artifact = stored_three_star(6675);
        assert_eq!(artifact.level(), 3);

        artifact.gain_exp(9775 - 6675, &mut rng(8));
        assert_eq!(artifact.level(), 4);

        let enhanced = artifact.sub_stats()[1];
        assert_eq!(enhanced.kind, StatKind::CritRate);
        assert!(
            sub_stat_rolls(3, StatKind::CritRate).contains(&enhanced.value),
            "{}",
            enhanced.value
        );
        // Later zero stats stay untouched
        assert_eq!(artifact.sub_stats()[2].value, 0.0);
        assert_eq!(artifact.sub_stats()[3].value, 0.0);
    }

    #[test]
    fn test_enhancement_rolls_a_random_stat_when_none_are_zero() {
        let mut artifact = Artifact::new(
            ArtifactSlot::FlowerOfLife,
            3,
            ArtifactData {
                exp: 6675,
                main_stat: sub(StatKind::Hp, 430.0),
                sub_stats: [
                    sub(StatKind::ElementalMastery, 9.79),
                    sub(StatKind::CritRate, 1.63),
                    sub(StatKind::CritDmg, 3.26),
                    sub(StatKind::AtkPercent, 2.45),
                ],
            },
        )
        .unwrap();

        let before: f64 = artifact.sub_stats().iter().map(|s| s.value).sum();
        artifact.gain_exp(9775 - 6675, &mut rng(9));
        let after: f64 = artifact.sub_stats().iter().map(|s| s.value).sum();
        assert!(after > before);
    }

    #[test]
    fn test_stored_data_is_validated() {
        // Duplicate sub stat
        assert!(Artifact::new(
            ArtifactSlot::FlowerOfLife,
            3,
            ArtifactData {
                exp: 0,
                main_stat: sub(StatKind::Hp, 430.0),
                sub_stats: [
                    sub(StatKind::CritRate, 0.0),
                    sub(StatKind::CritRate, 0.0),
                    sub(StatKind::CritDmg, 0.0),
                    sub(StatKind::AtkPercent, 0.0),
                ],
            },
        )
        .is_err());

        // Main stat not valid for the slot
        assert!(Artifact::new(
            ArtifactSlot::FlowerOfLife,
            3,
            ArtifactData {
                exp: 0,
                main_stat: sub(StatKind::Atk, 28.0),
                sub_stats: [
                    sub(StatKind::CritRate, 0.0),
                    sub(StatKind::Hp, 0.0),
                    sub(StatKind::CritDmg, 0.0),
                    sub(StatKind::AtkPercent, 0.0),
                ],
            },
        )
        .is_err());

        // Sub stat duplicating the main stat
        assert!(Artifact::new(
            ArtifactSlot::FlowerOfLife,
            3,
            ArtifactData {
                exp: 0,
                main_stat: sub(StatKind::Hp, 430.0),
                sub_stats: [
                    sub(StatKind::Hp, 0.0),
                    sub(StatKind::CritRate, 0.0),
                    sub(StatKind::CritDmg, 0.0),
                    sub(StatKind::AtkPercent, 0.0),
                ],
            },
        )
        .is_err());
    }

    #[test]
    fn test_base_stats_mapping() {
        let artifact = stored_three_star(0);
        let stats = artifact.base_stats();
        assert_eq!(stats.max_hp.ext, 430);
        assert_eq!(stats.elemental_mastery, 9);
        assert_eq!(stats.crit_rate, 0.0);
    }

    #[test]
    fn test_consumable_exp_by_rarity() {
        let artifact = Artifact::generate(ArtifactSlot::FlowerOfLife, 5, &mut rng(10)).unwrap();
        assert_eq!(artifact.base_consumable_exp(), 3780);
    }
}

//! PrimaryStat - the base/percent/ext triple behind HP, ATK and DEF

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// One primary attribute split into its three contribution channels.
///
/// Final value is calculated as:
/// `trunc(base * (1 + percent) + ext)`
///
/// - `base`: level-scaled flat value from the entity's own growth tables
/// - `percent`: sum of multiplicative bonuses (as decimal, 0.2 = +20%)
/// - `ext`: sum of flat additive bonuses from equipment and buffs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStat {
    pub base: i32,
    pub percent: f64,
    pub ext: i32,
}

impl PrimaryStat {
    /// Calculate the derived value, truncated toward zero
    pub fn derived(&self) -> i32 {
        (self.base as f64 * (1.0 + self.percent) + self.ext as f64) as i32
    }
}

impl Add for PrimaryStat {
    type Output = PrimaryStat;

    fn add(self, other: PrimaryStat) -> PrimaryStat {
        PrimaryStat {
            base: self.base + other.base,
            percent: self.percent + other.percent,
            ext: self.ext + other.ext,
        }
    }
}

impl Neg for PrimaryStat {
    type Output = PrimaryStat;

    fn neg(self) -> PrimaryStat {
        PrimaryStat {
            base: -self.base,
            percent: -self.percent,
            ext: -self.ext,
        }
    }
}

impl Sub for PrimaryStat {
    type Output = PrimaryStat;

    fn sub(self, other: PrimaryStat) -> PrimaryStat {
        self + (-other)
    }
}

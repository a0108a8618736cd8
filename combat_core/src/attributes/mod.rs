//! Attributes - the aggregated combat attribute block of one contributor
//!
//! Every stat-bearing thing (a character's growth tables, a weapon, an
//! artifact, a buff) produces an `Attributes` value; the combat layer sums
//! them field-wise into the final block a damage event reads from.

mod primary;

pub use primary::PrimaryStat;

use crate::element::Element;
use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// The full combat attribute set of one contributor.
///
/// A pure value type: combination is field-wise addition, the all-zero
/// block is the identity, and nothing here is ever mutated by more than
/// one owner. Percent fields are decimals (0.05 = 5%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    // === Primary attributes ===
    pub max_hp: PrimaryStat,
    pub atk: PrimaryStat,
    pub def: PrimaryStat,

    // === Scalar attributes ===
    pub elemental_mastery: i32,
    pub max_stamina: i32,
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub healing_bonus: f64,
    pub incoming_healing_bonus: f64,
    pub energy_recharge: f64,
    pub cd_reduction: f64,
    pub shield_strength: f64,

    // === Per-element damage bonus and resistance ===
    pub physical_dmg_bonus: f64,
    pub physical_res: f64,
    pub pyro_dmg_bonus: f64,
    pub pyro_res: f64,
    pub hydro_dmg_bonus: f64,
    pub hydro_res: f64,
    pub dendro_dmg_bonus: f64,
    pub dendro_res: f64,
    pub electro_dmg_bonus: f64,
    pub electro_res: f64,
    pub anemo_dmg_bonus: f64,
    pub anemo_res: f64,
    pub cryo_dmg_bonus: f64,
    pub cryo_res: f64,
    pub geo_dmg_bonus: f64,
    pub geo_res: f64,
}

impl Attributes {
    /// Create an all-zero block (the additive identity)
    pub fn new() -> Self {
        Attributes::default()
    }

    /// Derived max HP, truncated toward zero
    pub fn max_hp(&self) -> i32 {
        self.max_hp.derived()
    }

    /// Derived ATK, truncated toward zero
    pub fn atk(&self) -> i32 {
        self.atk.derived()
    }

    /// Derived DEF, truncated toward zero
    pub fn def(&self) -> i32 {
        self.def.derived()
    }

    /// Damage bonus for attacks of the given element
    pub fn dmg_bonus(&self, element: Element) -> f64 {
        match element {
            Element::Physical => self.physical_dmg_bonus,
            Element::Pyro => self.pyro_dmg_bonus,
            Element::Hydro => self.hydro_dmg_bonus,
            Element::Dendro => self.dendro_dmg_bonus,
            Element::Electro => self.electro_dmg_bonus,
            Element::Anemo => self.anemo_dmg_bonus,
            Element::Cryo => self.cryo_dmg_bonus,
            Element::Geo => self.geo_dmg_bonus,
        }
    }

    /// Resistance against incoming damage of the given element
    pub fn res(&self, element: Element) -> f64 {
        match element {
            Element::Physical => self.physical_res,
            Element::Pyro => self.pyro_res,
            Element::Hydro => self.hydro_res,
            Element::Dendro => self.dendro_res,
            Element::Electro => self.electro_res,
            Element::Anemo => self.anemo_res,
            Element::Cryo => self.cryo_res,
            Element::Geo => self.geo_res,
        }
    }

    /// Apply one typed stat roll to this block.
    ///
    /// `value` is in display units: flat kinds take the literal amount,
    /// percent kinds take percent points (3.1 = 3.1%). Flat rolls land in
    /// the `ext` channel of the primary triples.
    pub fn apply(&mut self, kind: StatKind, value: f64) {
        match kind {
            StatKind::Hp => self.max_hp.ext += value as i32,
            StatKind::Atk => self.atk.ext += value as i32,
            StatKind::Def => self.def.ext += value as i32,
            StatKind::HpPercent => self.max_hp.percent += value / 100.0,
            StatKind::AtkPercent => self.atk.percent += value / 100.0,
            StatKind::DefPercent => self.def.percent += value / 100.0,
            StatKind::ElementalMastery => self.elemental_mastery += value as i32,
            StatKind::EnergyRecharge => self.energy_recharge += value / 100.0,
            StatKind::CritRate => self.crit_rate += value / 100.0,
            StatKind::CritDmg => self.crit_dmg += value / 100.0,
            StatKind::HealingBonus => self.healing_bonus += value / 100.0,
            StatKind::PhysicalDmgBonus => self.physical_dmg_bonus += value / 100.0,
            StatKind::PyroDmgBonus => self.pyro_dmg_bonus += value / 100.0,
            StatKind::HydroDmgBonus => self.hydro_dmg_bonus += value / 100.0,
            StatKind::DendroDmgBonus => self.dendro_dmg_bonus += value / 100.0,
            StatKind::ElectroDmgBonus => self.electro_dmg_bonus += value / 100.0,
            StatKind::AnemoDmgBonus => self.anemo_dmg_bonus += value / 100.0,
            StatKind::CryoDmgBonus => self.cryo_dmg_bonus += value / 100.0,
            StatKind::GeoDmgBonus => self.geo_dmg_bonus += value / 100.0,
        }
    }
}

impl Add for Attributes {
    type Output = Attributes;

    fn add(self, other: Attributes) -> Attributes {
        Attributes {
            max_hp: self.max_hp + other.max_hp,
            atk: self.atk + other.atk,
            def: self.def + other.def,

            elemental_mastery: self.elemental_mastery + other.elemental_mastery,
            max_stamina: self.max_stamina + other.max_stamina,
            crit_rate: self.crit_rate + other.crit_rate,
            crit_dmg: self.crit_dmg + other.crit_dmg,
            healing_bonus: self.healing_bonus + other.healing_bonus,
            incoming_healing_bonus: self.incoming_healing_bonus + other.incoming_healing_bonus,
            energy_recharge: self.energy_recharge + other.energy_recharge,
            cd_reduction: self.cd_reduction + other.cd_reduction,
            shield_strength: self.shield_strength + other.shield_strength,

            physical_dmg_bonus: self.physical_dmg_bonus + other.physical_dmg_bonus,
            physical_res: self.physical_res + other.physical_res,
            pyro_dmg_bonus: self.pyro_dmg_bonus + other.pyro_dmg_bonus,
            pyro_res: self.pyro_res + other.pyro_res,
            hydro_dmg_bonus: self.hydro_dmg_bonus + other.hydro_dmg_bonus,
            hydro_res: self.hydro_res + other.hydro_res,
            dendro_dmg_bonus: self.dendro_dmg_bonus + other.dendro_dmg_bonus,
            dendro_res: self.dendro_res + other.dendro_res,
            electro_dmg_bonus: self.electro_dmg_bonus + other.electro_dmg_bonus,
            electro_res: self.electro_res + other.electro_res,
            anemo_dmg_bonus: self.anemo_dmg_bonus + other.anemo_dmg_bonus,
            anemo_res: self.anemo_res + other.anemo_res,
            cryo_dmg_bonus: self.cryo_dmg_bonus + other.cryo_dmg_bonus,
            cryo_res: self.cryo_res + other.cryo_res,
            geo_dmg_bonus: self.geo_dmg_bonus + other.geo_dmg_bonus,
            geo_res: self.geo_res + other.geo_res,
        }
    }
}

impl Neg for Attributes {
    type Output = Attributes;

    fn neg(self) -> Attributes {
        Attributes {
            max_hp: -self.max_hp,
            atk: -self.atk,
            def: -self.def,

            elemental_mastery: -self.elemental_mastery,
            max_stamina: -self.max_stamina,
            crit_rate: -self.crit_rate,
            crit_dmg: -self.crit_dmg,
            healing_bonus: -self.healing_bonus,
            incoming_healing_bonus: -self.incoming_healing_bonus,
            energy_recharge: -self.energy_recharge,
            cd_reduction: -self.cd_reduction,
            shield_strength: -self.shield_strength,

            physical_dmg_bonus: -self.physical_dmg_bonus,
            physical_res: -self.physical_res,
            pyro_dmg_bonus: -self.pyro_dmg_bonus,
            pyro_res: -self.pyro_res,
            hydro_dmg_bonus: -self.hydro_dmg_bonus,
            hydro_res: -self.hydro_res,
            dendro_dmg_bonus: -self.dendro_dmg_bonus,
            dendro_res: -self.dendro_res,
            electro_dmg_bonus: -self.electro_dmg_bonus,
            electro_res: -self.electro_res,
            anemo_dmg_bonus: -self.anemo_dmg_bonus,
            anemo_res: -self.anemo_res,
            cryo_dmg_bonus: -self.cryo_dmg_bonus,
            cryo_res: -self.cryo_res,
            geo_dmg_bonus: -self.geo_dmg_bonus,
            geo_res: -self.geo_res,
        }
    }
}

impl Sub for Attributes {
    type Output = Attributes;

    fn sub(self, other: Attributes) -> Attributes {
        self + (-other)
    }
}

impl AddAssign for Attributes {
    fn add_assign(&mut self, other: Attributes) {
        *self = *self + other;
    }
}

impl SubAssign for Attributes {
    fn sub_assign(&mut self, other: Attributes) {
        *self = *self - other;
    }
}

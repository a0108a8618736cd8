//! Damage - one resolved or resolvable combat event
//!
//! A `Damage` is loaded by the combat-event layer through setters, then
//! consumed through [`Damage::resolve`]. Two mutually exclusive shapes
//! exist: true damage (a fraction of the victim's max HP, for
//! environmental hazards) and normal damage (the full attacker/victim
//! formula). Accessing a field that belongs to the other shape is a caller
//! bug and fails fast with a [`DamageError`].

pub mod calculation;

pub use calculation::{
    amplifying_bonus, defense_multiplier, resistance_multiplier, transformative_level_value,
    transformative_mastery_bonus, transformative_multiplier,
};

use crate::attributes::Attributes;
use crate::element::{resolve_reaction, Element, ReactionGroup, ReactionType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wrong-shape access on a `Damage` instance.
///
/// These are precondition violations, not recoverable runtime states; the
/// calling layer decides how to surface a failed resolution.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageError {
    #[error("the damage is not normal damage")]
    NotNormalDamage,
    #[error("the damage is not true damage")]
    NotTrueDamage,
    #[error("the damage is not primary damage")]
    NotPrimaryDamage,
    #[error("the damage is not transformative damage")]
    NotTransformativeDamage,
}

/// What dealt the damage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    #[default]
    Mob,
    Environment,
}

/// One combat damage event.
///
/// Constructed with neutral defaults (physical element, amplifier 1,
/// level 1, zero stats) and populated by the caller. A transformative
/// reaction's follow-on hit is derived with [`Damage::secondary`]; such an
/// instance is flagged secondary and may not change its source type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Damage {
    source_type: SourceType,

    attack_element: Element,
    is_secondary: bool,
    is_secondary_swirl: bool,
    secondary_reaction_type: ReactionType,
    true_damage_proportion: f64,

    attacker_amplifier: f64,
    attacker_level: u32,
    attacker_stats: Attributes,

    victim_element: Element,
    victim_level: u32,
    victim_stats: Attributes,
}

impl Default for Damage {
    fn default() -> Self {
        Damage {
            source_type: SourceType::Mob,
            attack_element: Element::Physical,
            is_secondary: false,
            is_secondary_swirl: false,
            secondary_reaction_type: ReactionType::None,
            true_damage_proportion: 0.0,
            attacker_amplifier: 1.0,
            attacker_level: 1,
            attacker_stats: Attributes::new(),
            victim_element: Element::Physical,
            victim_level: 1,
            victim_stats: Attributes::new(),
        }
    }
}

impl Damage {
    /// Create a damage event with neutral defaults
    pub fn new() -> Self {
        Damage::default()
    }

    /// Check if the damage is true damage
    pub fn is_true_damage(&self) -> bool {
        self.source_type == SourceType::Environment
    }

    /// Get the source type.
    ///
    /// Only available for normal damage.
    pub fn source_type(&self) -> Result<SourceType, DamageError> {
        self.ensure_normal()?;
        Ok(self.source_type)
    }

    /// Get the element type of the damage.
    ///
    /// Only available for normal damage.
    pub fn element(&self) -> Result<Element, DamageError> {
        self.ensure_normal()?;
        Ok(self.attack_element)
    }

    /// Get the elemental reaction type.
    ///
    /// Only available for normal damage.
    pub fn reaction_type(&self) -> Result<ReactionType, DamageError> {
        self.ensure_normal()?;
        Ok(self.reaction_type_unchecked())
    }

    /// Get the elemental reaction group.
    ///
    /// Only available for normal damage.
    pub fn reaction_group(&self) -> Result<ReactionGroup, DamageError> {
        self.ensure_normal()?;
        Ok(self.reaction_group_unchecked())
    }

    /// Set the source type.
    ///
    /// A derived secondary instance may not be reassigned.
    pub fn set_source_type(&mut self, source_type: SourceType) -> Result<(), DamageError> {
        if self.is_secondary {
            return Err(DamageError::NotPrimaryDamage);
        }
        self.source_type = source_type;
        Ok(())
    }

    /// Set the attack element. Only available for normal damage.
    pub fn set_attack_element(&mut self, element: Element) -> Result<(), DamageError> {
        self.ensure_normal()?;
        self.attack_element = element;
        Ok(())
    }

    /// Set the attacker's skill multiplier. Only available for normal damage.
    pub fn set_attacker_amplifier(&mut self, amplifier: f64) -> Result<(), DamageError> {
        self.ensure_normal()?;
        self.attacker_amplifier = amplifier;
        Ok(())
    }

    /// Set the attacker's level. Only available for normal damage.
    pub fn set_attacker_level(&mut self, level: u32) -> Result<(), DamageError> {
        self.ensure_normal()?;
        self.attacker_level = level;
        Ok(())
    }

    /// Set the attacker's attribute block. Only available for normal damage.
    pub fn set_attacker_stats(&mut self, stats: Attributes) -> Result<(), DamageError> {
        self.ensure_normal()?;
        self.attacker_stats = stats;
        Ok(())
    }

    /// Set the max-HP proportion of true damage.
    ///
    /// Only available for true damage.
    pub fn set_true_damage_proportion(&mut self, proportion: f64) -> Result<(), DamageError> {
        if !self.is_true_damage() {
            return Err(DamageError::NotTrueDamage);
        }
        self.true_damage_proportion = proportion;
        Ok(())
    }

    /// Set the element currently attached to the victim
    pub fn set_victim_attached_element(&mut self, element: Element) {
        self.victim_element = element;
    }

    /// Set the victim's level
    pub fn set_victim_level(&mut self, level: u32) {
        self.victim_level = level;
    }

    /// Set the victim's attribute block
    pub fn set_victim_stats(&mut self, stats: Attributes) {
        self.victim_stats = stats;
    }

    /// Resolve the damage value (or, for true damage, the absolute amount
    /// derived from the victim's max HP).
    ///
    /// The RNG drives the crit roll; pass a seeded generator for
    /// reproducible resolution.
    pub fn resolve(&self, rng: &mut impl Rng) -> f64 {
        // True damage ignores every attacker-side field
        if self.is_true_damage() {
            return self.true_damage_proportion * self.victim_stats.max_hp() as f64;
        }

        let group = self.reaction_group_unchecked();
        let mut damage = 0.0;

        if matches!(
            group,
            ReactionGroup::None | ReactionGroup::Amplifying | ReactionGroup::Transformative
        ) {
            damage = self.attacker_stats.atk() as f64 * self.attacker_amplifier;

            damage *= 1.0 + self.attacker_stats.dmg_bonus(self.attack_element);

            if rng.gen::<f64>() < self.attacker_stats.crit_rate {
                damage *= 1.0 + self.attacker_stats.crit_dmg;
            }

            damage *= calculation::defense_multiplier(self.attacker_level, self.victim_stats.def());
        }

        if group == ReactionGroup::Amplifying {
            damage *= calculation::amplifying_bonus(
                self.attack_element,
                self.victim_element,
                self.attacker_stats.elemental_mastery,
            );
        }

        if group == ReactionGroup::TransformativeSecondary {
            // A secondary hit discards the base-ATK formula entirely
            damage = calculation::transformative_level_value(self.attacker_level)
                * calculation::transformative_multiplier(self.secondary_reaction_type)
                * calculation::transformative_mastery_bonus(self.attacker_stats.elemental_mastery);
        }

        damage *= calculation::resistance_multiplier(self.victim_stats.res(self.attack_element));

        damage.max(0.0)
    }

    /// Derive the secondary damage of a transformative reaction.
    ///
    /// Only attacker-side fields carry over; the caller must populate
    /// victim fields before resolving the returned instance. Valid when
    /// this hit's reaction group is transformative, or when this instance
    /// is itself a secondary swirl hit (the swirled element can react
    /// again).
    pub fn secondary(&self) -> Result<Damage, DamageError> {
        self.ensure_normal()?;

        let reaction = self.reaction_type_unchecked();
        let swirl_followup =
            self.is_secondary && self.secondary_reaction_type == ReactionType::Swirl;
        if self.reaction_group_unchecked() != ReactionGroup::Transformative && !swirl_followup {
            return Err(DamageError::NotTransformativeDamage);
        }

        let mut damage = Damage::new();
        damage.source_type = self.source_type;

        damage.attack_element = match reaction {
            ReactionType::ElectroCharged => Element::Electro,
            ReactionType::Overloaded => Element::Pyro,
            ReactionType::Shattered => Element::Physical,
            ReactionType::Superconduct => Element::Cryo,
            ReactionType::Swirl => self.victim_element,
            _ => Element::Physical,
        };

        damage.is_secondary = true;
        damage.is_secondary_swirl = reaction == ReactionType::Swirl;
        damage.secondary_reaction_type = reaction;

        damage.attacker_amplifier = self.attacker_amplifier;
        damage.attacker_level = self.attacker_level;
        damage.attacker_stats = self.attacker_stats;

        Ok(damage)
    }

    fn ensure_normal(&self) -> Result<(), DamageError> {
        if self.is_true_damage() {
            return Err(DamageError::NotNormalDamage);
        }
        Ok(())
    }

    fn reaction_type_unchecked(&self) -> ReactionType {
        self.resolve_reaction_unchecked().0
    }

    fn reaction_group_unchecked(&self) -> ReactionGroup {
        self.resolve_reaction_unchecked().1
    }

    fn resolve_reaction_unchecked(&self) -> (ReactionType, ReactionGroup) {
        resolve_reaction(
            self.attack_element,
            self.victim_element,
            self.is_secondary,
            self.is_secondary_swirl,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::PrimaryStat;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-6;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn attacker(atk_base: i32) -> Attributes {
        let mut stats = Attributes::new();
        stats.atk = PrimaryStat {
            base: atk_base,
            percent: 0.0,
            ext: 0,
        };
        stats
    }

    fn victim(def_base: i32) -> Attributes {
        let mut stats = Attributes::new();
        stats.def = PrimaryStat {
            base: def_base,
            percent: 0.0,
            ext: 0,
        };
        stats
    }

    #[test]
    fn test_true_damage_ignores_attacker_fields() {
        let mut damage = Damage::new();
        damage.set_source_type(SourceType::Environment).unwrap();
        damage.set_true_damage_proportion(0.05).unwrap();

        let mut victim_stats = Attributes::new();
        victim_stats.max_hp.base = 2000;
        damage.set_victim_stats(victim_stats);

        assert!((damage.resolve(&mut rng()) - 100.0).abs() < EPS);
    }

    #[test]
    fn test_true_damage_rejects_normal_accessors() {
        let mut damage = Damage::new();
        damage.set_source_type(SourceType::Environment).unwrap();

        assert_eq!(damage.element(), Err(DamageError::NotNormalDamage));
        assert_eq!(damage.reaction_type(), Err(DamageError::NotNormalDamage));
        assert_eq!(damage.reaction_group(), Err(DamageError::NotNormalDamage));
        assert_eq!(
            damage.set_attack_element(Element::Pyro),
            Err(DamageError::NotNormalDamage)
        );
        assert_eq!(
            damage.set_attacker_level(10),
            Err(DamageError::NotNormalDamage)
        );
        assert_eq!(damage.secondary(), Err(DamageError::NotNormalDamage));
    }

    #[test]
    fn test_normal_damage_rejects_true_proportion() {
        let mut damage = Damage::new();
        assert_eq!(
            damage.set_true_damage_proportion(0.1),
            Err(DamageError::NotTrueDamage)
        );
    }

    #[test]
    fn test_plain_hit_with_defense() {
        let mut damage = Damage::new();
        damage.set_attacker_stats(attacker(1000)).unwrap();
        damage.set_attacker_amplifier(1.5).unwrap();
        damage.set_attacker_level(20).unwrap();
        damage.set_victim_stats(victim(500));

        // 1500 * 600 / 1100, no crit (rate 0), no bonus, no resistance
        let expected = 1500.0 * 600.0 / 1100.0;
        assert!((damage.resolve(&mut rng()) - expected).abs() < EPS);
    }

    #[test]
    fn test_elemental_bonus_applies_to_attack_element_only() {
        let mut damage = Damage::new();
        let mut stats = attacker(100);
        stats.pyro_dmg_bonus = 0.5;
        stats.hydro_dmg_bonus = 9.0;
        damage.set_attacker_stats(stats).unwrap();
        damage.set_attack_element(Element::Pyro).unwrap();
        damage.set_attacker_level(0).unwrap();

        // 100 * 1.5 * (100*5)/(100*5 + 0) with physical victim: no reaction
        assert!((damage.resolve(&mut rng()) - 150.0).abs() < EPS);
    }

    #[test]
    fn test_crit_roll_is_deterministic_at_the_extremes() {
        let mut damage = Damage::new();
        let mut stats = attacker(100);
        stats.crit_rate = 1.0;
        stats.crit_dmg = 0.5;
        damage.set_attacker_stats(stats).unwrap();
        damage.set_attacker_level(0).unwrap();

        let first = damage.resolve(&mut rng());
        let second = damage.resolve(&mut rng());
        assert!((first - 150.0).abs() < EPS);
        assert!((first - second).abs() < EPS);
    }

    #[test]
    fn test_amplifying_reaction_multiplies_the_hit() {
        let mut damage = Damage::new();
        damage.set_attacker_stats(attacker(100)).unwrap();
        damage.set_attack_element(Element::Pyro).unwrap();
        damage.set_attacker_level(0).unwrap();
        damage.set_victim_attached_element(Element::Cryo);

        assert_eq!(damage.reaction_type().unwrap(), ReactionType::Melt);
        assert_eq!(damage.reaction_group().unwrap(), ReactionGroup::Amplifying);
        // Pyro attacking Cryo doubles the hit
        assert!((damage.resolve(&mut rng()) - 200.0).abs() < EPS);
    }

    #[test]
    fn test_resistance_applies_to_attack_element() {
        let mut damage = Damage::new();
        damage.set_attacker_stats(attacker(100)).unwrap();
        damage.set_attacker_level(0).unwrap();

        let mut victim_stats = Attributes::new();
        victim_stats.physical_res = 0.5;
        damage.set_victim_stats(victim_stats);

        assert!((damage.resolve(&mut rng()) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_negative_resistance_amplifies() {
        let mut damage = Damage::new();
        damage.set_attacker_stats(attacker(100)).unwrap();
        damage.set_attacker_level(0).unwrap();

        let mut victim_stats = Attributes::new();
        victim_stats.physical_res = -0.5;
        damage.set_victim_stats(victim_stats);

        assert!((damage.resolve(&mut rng()) - 125.0).abs() < EPS);
    }

    #[test]
    fn test_overloaded_secondary_damage() {
        let mut damage = Damage::new();
        damage.set_attacker_stats(attacker(100)).unwrap();
        damage.set_attack_element(Element::Electro).unwrap();
        damage.set_attacker_level(90).unwrap();
        damage.set_victim_attached_element(Element::Pyro);

        assert_eq!(damage.reaction_type().unwrap(), ReactionType::Overloaded);
        assert_eq!(
            damage.reaction_group().unwrap(),
            ReactionGroup::Transformative
        );

        let secondary = damage.secondary().unwrap();
        assert_eq!(secondary.element().unwrap(), Element::Pyro);
        assert_eq!(
            secondary.reaction_group().unwrap(),
            ReactionGroup::TransformativeSecondary
        );

        // Level value at 90 times the overloaded multiplier, EM 0, no RES
        let expected = transformative_level_value(90) * 2.0;
        assert!((secondary.resolve(&mut rng()) - expected).abs() < EPS);
        assert!((transformative_level_value(90) - 1450.2654577).abs() < 1e-3);
    }

    #[test]
    fn test_secondary_element_remap() {
        for (attack, attached, element) in [
            (Element::Electro, Element::Hydro, Element::Electro),
            (Element::Electro, Element::Pyro, Element::Pyro),
            (Element::Cryo, Element::Electro, Element::Cryo),
        ] {
            let mut damage = Damage::new();
            damage.set_attack_element(attack).unwrap();
            damage.set_victim_attached_element(attached);
            let secondary = damage.secondary().unwrap();
            assert_eq!(secondary.element().unwrap(), element);
        }
    }

    #[test]
    fn test_swirl_secondary_takes_the_attached_element() {
        let mut damage = Damage::new();
        damage.set_attack_element(Element::Anemo).unwrap();
        damage.set_victim_attached_element(Element::Cryo);

        let secondary = damage.secondary().unwrap();
        assert_eq!(secondary.element().unwrap(), Element::Cryo);
        // A swirled hit can itself trigger another reaction
        assert_eq!(secondary.reaction_type().unwrap(), ReactionType::None);
    }

    #[test]
    fn test_swirl_secondary_can_chain_once_more() {
        let mut damage = Damage::new();
        damage.set_attack_element(Element::Anemo).unwrap();
        damage.set_victim_attached_element(Element::Pyro);

        let mut secondary = damage.secondary().unwrap();
        secondary.set_victim_attached_element(Element::Cryo);

        // Pyro swirled onto a Cryo-attached victim melts again
        assert_eq!(secondary.reaction_type().unwrap(), ReactionType::Melt);
        let chained = secondary.secondary().unwrap();
        assert_eq!(
            chained.reaction_group().unwrap(),
            ReactionGroup::TransformativeSecondary
        );
    }

    #[test]
    fn test_non_swirl_secondary_has_no_reaction() {
        let mut damage = Damage::new();
        damage.set_attack_element(Element::Electro).unwrap();
        damage.set_victim_attached_element(Element::Pyro);

        let mut secondary = damage.secondary().unwrap();
        secondary.set_victim_attached_element(Element::Hydro);

        // Pyro on Hydro would vaporize, but a non-swirl secondary is inert
        assert_eq!(secondary.reaction_type().unwrap(), ReactionType::None);
        assert_eq!(secondary.secondary(), Err(DamageError::NotTransformativeDamage));
    }

    #[test]
    fn test_secondary_source_type_is_frozen() {
        let mut damage = Damage::new();
        damage.set_attack_element(Element::Electro).unwrap();
        damage.set_victim_attached_element(Element::Hydro);

        let mut secondary = damage.secondary().unwrap();
        assert_eq!(
            secondary.set_source_type(SourceType::Environment),
            Err(DamageError::NotPrimaryDamage)
        );
    }

    #[test]
    fn test_secondary_requires_transformative_reaction() {
        let mut damage = Damage::new();
        damage.set_attack_element(Element::Pyro).unwrap();
        damage.set_victim_attached_element(Element::Hydro);

        // Vaporize amplifies, it does not transform
        assert_eq!(damage.secondary(), Err(DamageError::NotTransformativeDamage));
    }

    #[test]
    fn test_resolution_is_idempotent_without_crit_variance() {
        let mut damage = Damage::new();
        damage.set_attacker_stats(attacker(750)).unwrap();
        damage.set_attacker_amplifier(2.25).unwrap();
        damage.set_attacker_level(60).unwrap();
        damage.set_victim_stats(victim(321));

        let first = damage.resolve(&mut rng());
        let second = damage.resolve(&mut rng());
        assert!((first - second).abs() < EPS);
    }

    #[test]
    fn test_damage_never_negative() {
        let mut damage = Damage::new();
        let mut stats = attacker(100);
        stats.physical_dmg_bonus = -5.0;
        damage.set_attacker_stats(stats).unwrap();

        assert_eq!(damage.resolve(&mut rng()), 0.0);
    }
}

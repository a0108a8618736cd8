//! Core types shared across the combat and progression modules

use serde::{Deserialize, Serialize};

/// A stat kind as it appears on an item roll or a scaling table.
///
/// Values carried alongside a `StatKind` are in display units: flat kinds
/// hold the literal amount, percent kinds hold percent points (`3.1` means
/// 3.1%). [`crate::attributes::Attributes::apply`] performs the `/ 100`
/// conversion for percent kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Hp,
    Atk,
    Def,
    HpPercent,
    AtkPercent,
    DefPercent,
    ElementalMastery,
    EnergyRecharge,
    CritRate,
    CritDmg,
    HealingBonus,
    PhysicalDmgBonus,
    PyroDmgBonus,
    HydroDmgBonus,
    DendroDmgBonus,
    ElectroDmgBonus,
    AnemoDmgBonus,
    CryoDmgBonus,
    GeoDmgBonus,
}

impl StatKind {
    /// Whether the carried value is percent points rather than a flat amount
    pub fn is_percent(self) -> bool {
        !matches!(
            self,
            StatKind::Hp | StatKind::Atk | StatKind::Def | StatKind::ElementalMastery
        )
    }
}

/// Equipment slot of an artifact piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactSlot {
    FlowerOfLife,
    PlumeOfDeath,
    SandsOfEon,
    GobletOfEonothem,
    CircletOfLogos,
}

impl ArtifactSlot {
    /// Get all artifact slots
    pub fn all() -> &'static [ArtifactSlot] {
        &[
            ArtifactSlot::FlowerOfLife,
            ArtifactSlot::PlumeOfDeath,
            ArtifactSlot::SandsOfEon,
            ArtifactSlot::GobletOfEonothem,
            ArtifactSlot::CircletOfLogos,
        ]
    }
}

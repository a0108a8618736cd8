//! Weapon record loading

use super::ConfigError;
use crate::progression::weapon::max_ascension_phase;
use crate::progression::{ProgressionError, WeaponRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for weapon record configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponsConfig {
    #[serde(rename = "weapons")]
    pub weapons: Vec<WeaponRecord>,
}

/// Identifier-keyed weapon record registry
#[derive(Debug, Clone, Default)]
pub struct WeaponRegistry {
    records: HashMap<String, WeaponRecord>,
}

impl WeaponRegistry {
    pub fn from_records(records: impl IntoIterator<Item = WeaponRecord>) -> Self {
        let mut registry = WeaponRegistry::default();
        for record in records {
            registry.insert(record);
        }
        registry
    }

    pub fn insert(&mut self, record: WeaponRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Resolve an identifier to its record
    pub fn get(&self, id: &str) -> Result<&WeaponRecord, ProgressionError> {
        self.records
            .get(id)
            .ok_or_else(|| ProgressionError::UnknownWeapon(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(record: &WeaponRecord) -> Result<(), ConfigError> {
    if record.id.is_empty() {
        return Err(ConfigError::ValidationError(
            "weapon record with empty id".to_string(),
        ));
    }
    if !(1..=5).contains(&record.rarity) {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has rarity {} outside 1-5",
            record.id, record.rarity
        )));
    }
    let phases = max_ascension_phase(record.rarity) as usize + 1;
    if record.atk_base.len() != phases {
        return Err(ConfigError::ValidationError(format!(
            "weapon '{}' has {} ATK entries, rarity {} needs {}",
            record.id,
            record.atk_base.len(),
            record.rarity,
            phases
        )));
    }
    Ok(())
}

/// Load weapon records from a TOML file
pub fn load_weapon_configs(path: &Path) -> Result<WeaponRegistry, ConfigError> {
    let config: WeaponsConfig = super::load_toml(path)?;
    build_registry(config)
}

/// Load weapon records from a TOML string
pub fn parse_weapon_configs(content: &str) -> Result<WeaponRegistry, ConfigError> {
    let config: WeaponsConfig = super::parse_toml(content)?;
    build_registry(config)
}

fn build_registry(config: WeaponsConfig) -> Result<WeaponRegistry, ConfigError> {
    for record in &config.weapons {
        validate(record)?;
    }
    Ok(WeaponRegistry::from_records(config.weapons))
}

/// Get the built-in weapon records
pub fn default_weapons() -> WeaponRegistry {
    let toml = include_str!("../../config/weapons.toml");
    parse_weapon_configs(toml).unwrap_or_else(|_| WeaponRegistry::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weapons_parse() {
        let registry = default_weapons();
        assert!(registry.len() >= 2);
        let blade = registry.get("dull_blade").unwrap();
        assert_eq!(blade.rarity, 1);
        assert_eq!(blade.atk_base, vec![22, 48, 73, 91, 109]);
    }

    #[test]
    fn test_unknown_identifier_is_an_error() {
        let registry = default_weapons();
        assert!(matches!(
            registry.get("wooden_spoon"),
            Err(ProgressionError::UnknownWeapon(_))
        ));
    }

    #[test]
    fn test_validation_rejects_arity_mismatch() {
        let toml = r#"
[[weapons]]
id = "broken"
name = "Broken"
rarity = 3
atk_base = [1, 2, 3]
atk_diff = 1
"#;
        assert!(matches!(
            parse_weapon_configs(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}

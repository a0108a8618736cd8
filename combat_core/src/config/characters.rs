//! Character record loading
//!
//! Concrete characters are rows of data keyed by identifier; the registry
//! replaces a type-per-character hierarchy, and unknown identifiers are
//! lookup errors rather than unreachable branches.

use super::ConfigError;
use crate::progression::{CharacterRecord, ProgressionError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for character record configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharactersConfig {
    #[serde(rename = "characters")]
    pub characters: Vec<CharacterRecord>,
}

/// Identifier-keyed character record registry
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    records: HashMap<String, CharacterRecord>,
}

impl CharacterRegistry {
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut registry = CharacterRegistry::default();
        for record in records {
            registry.insert(record);
        }
        registry
    }

    pub fn insert(&mut self, record: CharacterRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Resolve an identifier to its record
    pub fn get(&self, id: &str) -> Result<&CharacterRecord, ProgressionError> {
        self.records
            .get(id)
            .ok_or_else(|| ProgressionError::UnknownCharacter(id.to_string()))
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

fn validate(record: &CharacterRecord) -> Result<(), ConfigError> {
    if record.id.is_empty() {
        return Err(ConfigError::ValidationError(
            "character record with empty id".to_string(),
        ));
    }
    if !(1..=5).contains(&record.rarity) {
        return Err(ConfigError::ValidationError(format!(
            "character '{}' has rarity {} outside 1-5",
            record.id, record.rarity
        )));
    }
    Ok(())
}

/// Load character records from a TOML file
pub fn load_character_configs(path: &Path) -> Result<CharacterRegistry, ConfigError> {
    let config: CharactersConfig = super::load_toml(path)?;
    build_registry(config)
}

/// Load character records from a TOML string
pub fn parse_character_configs(content: &str) -> Result<CharacterRegistry, ConfigError> {
    let config: CharactersConfig = super::parse_toml(content)?;
    build_registry(config)
}

fn build_registry(config: CharactersConfig) -> Result<CharacterRegistry, ConfigError> {
    for record in &config.characters {
        validate(record)?;
    }
    Ok(CharacterRegistry::from_records(config.characters))
}

/// Get the built-in character records
pub fn default_characters() -> CharacterRegistry {
    let toml = include_str!("../../config/characters.toml");
    parse_character_configs(toml).unwrap_or_else(|_| CharacterRegistry::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_characters_parse() {
        let registry = default_characters();
        assert!(!registry.is_empty());
        let kuki = registry.get("kuki_shinobu").unwrap();
        assert_eq!(kuki.rarity, 4);
        assert_eq!(kuki.hp_base[0], 945);
        assert_eq!(kuki.hp_diff, 85);
    }

    #[test]
    fn test_unknown_identifier_is_an_error() {
        let registry = default_characters();
        assert!(matches!(
            registry.get("nonexistent"),
            Err(ProgressionError::UnknownCharacter(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_rarity() {
        let toml = r#"
[[characters]]
id = "broken"
name = "Broken"
rarity = 9
element = "pyro"
hp_base = [1, 1, 1, 1, 1, 1, 1]
hp_diff = 1
atk_base = [1, 1, 1, 1, 1, 1, 1]
atk_diff = 1
def_base = [1, 1, 1, 1, 1, 1, 1]
def_diff = 1
ascension_stat = "atk_percent"
ascension_stat_values = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
"#;
        assert!(matches!(
            parse_character_configs(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}

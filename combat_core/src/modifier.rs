//! Modifier - transient buffs and debuffs attached to an entity
//!
//! Modifier IDs come from a [`ModifierIdAllocator`] owned by the caller,
//! so resolution stays reproducible in tests and the counter can be
//! confined to one logic thread by the host.

use crate::attributes::Attributes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload access mismatch on a modifier
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierError {
    #[error("the modifier does not carry an attribute payload")]
    IncorrectAttributeQuery,
}

/// Identifier of one attached modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModifierId(u64);

/// Hands out process-unique modifier IDs.
///
/// Explicitly owned state: create one per logic thread (or wrap in a lock)
/// instead of relying on a hidden global counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifierIdAllocator {
    latest_id: u64,
}

impl ModifierIdAllocator {
    pub fn new() -> Self {
        ModifierIdAllocator::default()
    }

    pub fn allocate(&mut self) -> ModifierId {
        self.latest_id += 1;
        ModifierId(self.latest_id)
    }
}

/// What a modifier does while attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierPayload {
    /// Adds an attribute block to the owner's stats
    Stats(Attributes),
}

/// One attached buff/debuff with an expiry clock.
///
/// The clock is whatever monotonic time base the host uses; this core
/// only compares it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    id: ModifierId,
    payload: ModifierPayload,
    expired_clock: f64,
}

impl Modifier {
    pub fn new(id: ModifierId, payload: ModifierPayload, expired_clock: f64) -> Self {
        Modifier {
            id,
            payload,
            expired_clock,
        }
    }

    pub fn id(&self) -> ModifierId {
        self.id
    }

    pub fn expired_clock(&self) -> f64 {
        self.expired_clock
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expired_clock
    }

    /// The attribute payload.
    ///
    /// Fails with [`ModifierError::IncorrectAttributeQuery`] if the
    /// modifier carries a different payload kind.
    pub fn attributes(&self) -> Result<&Attributes, ModifierError> {
        match &self.payload {
            ModifierPayload::Stats(attrs) => Ok(attrs),
        }
    }
}

use crate::state::AbilityId;

/// Ability definitions served by the host's spell store.
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, id: AbilityId) -> Option<AbilityDefinition>;
}

/// Static definition of an ability, as far as cooldown gating is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    pub id: AbilityId,
    /// Cooldown length in milliseconds.
    pub cooldown_ms: u64,
}

impl AbilityDefinition {
    pub const fn new(id: AbilityId, cooldown_ms: u64) -> Self {
        Self { id, cooldown_ms }
    }
}

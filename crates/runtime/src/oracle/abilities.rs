//! Ability definitions served through [`summon_core::AbilityOracle`].
use std::collections::HashMap;

use summon_core::{AbilityDefinition, AbilityId, AbilityOracle};

/// AbilityOracle implementation backed by the scenario's ability table.
#[derive(Debug, Default)]
pub struct AbilityOracleImpl {
    abilities: HashMap<AbilityId, AbilityDefinition>,
}

impl AbilityOracleImpl {
    pub fn new(definitions: impl IntoIterator<Item = AbilityDefinition>) -> Self {
        Self {
            abilities: definitions
                .into_iter()
                .map(|definition| (definition.id, definition))
                .collect(),
        }
    }
}

impl AbilityOracle for AbilityOracleImpl {
    fn ability(&self, id: AbilityId) -> Option<AbilityDefinition> {
        self.abilities.get(&id).copied()
    }
}

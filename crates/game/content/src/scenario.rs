//! Scenario and script formats.

use summon_core::{
    AbilityDefinition, ActorState, EntityId, GameTime, MapId, StateError, WorldObject,
    WorldState,
};

/// Axis-aligned box that blocks line of sight on one map.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub map: MapId,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Obstacle {
    /// Creates a box from two opposite corners in any order.
    pub fn new(map: MapId, a: [f32; 3], b: [f32; 3]) -> Self {
        Self {
            map,
            min: [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
            max: [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
        }
    }
}

/// A complete world snapshot plus the static data the oracles serve.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    #[cfg_attr(feature = "serde", serde(default))]
    pub clock: GameTime,
    pub actors: Vec<ActorState>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<WorldObject>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Obstacle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<AbilityDefinition>,
}

impl Scenario {
    /// Registers every actor and object in a fresh world.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DuplicateEntity`] if two entries share an id.
    pub fn build_world(&self) -> Result<WorldState, StateError> {
        let mut world = WorldState::new(self.clock);
        for actor in &self.actors {
            world.insert_actor(actor.clone())?;
        }
        for object in &self.objects {
            world.insert_object(*object)?;
        }
        Ok(world)
    }
}

/// One line of a simulation script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptStep {
    /// Controller asks the bot to come over.
    Summon { controller: EntityId, bot: EntityId },
    /// Controller used a world object; `bot` reacts to it.
    UseObject {
        bot: EntityId,
        controller: Option<EntityId>,
        object: EntityId,
    },
    /// Advances the world clock.
    Advance { millis: u64 },
    /// Every in-flight relocation reaches its destination.
    Arrive,
}

use super::{ActorState, EntityId, GameTime, MapId, WorldObject};
use crate::state::StateError;

/// Host-owned container of every actor and object the summoning rules may touch.
///
/// Actors and objects are kept in registration order; searches report matches
/// in that order.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    /// Current world clock, used for cooldown bookkeeping.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clock: GameTime,
    #[cfg_attr(feature = "serde", serde(default))]
    actors: Vec<ActorState>,
    #[cfg_attr(feature = "serde", serde(default))]
    objects: Vec<WorldObject>,
}

impl WorldState {
    pub fn new(clock: GameTime) -> Self {
        Self {
            clock,
            actors: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Registers an actor.
    ///
    /// # Errors
    ///
    /// Returns `StateError::DuplicateEntity` if the id is already in use.
    pub fn insert_actor(&mut self, actor: ActorState) -> Result<(), StateError> {
        if self.contains(actor.id) {
            return Err(StateError::DuplicateEntity(actor.id));
        }
        self.actors.push(actor);
        Ok(())
    }

    /// Registers a world object.
    ///
    /// # Errors
    ///
    /// Returns `StateError::DuplicateEntity` if the id is already in use.
    pub fn insert_object(&mut self, object: WorldObject) -> Result<(), StateError> {
        if self.contains(object.id) {
            return Err(StateError::DuplicateEntity(object.id));
        }
        self.objects.push(object);
        Ok(())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.actor(id).is_some() || self.objects.iter().any(|object| object.id == id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter()
    }

    pub fn objects(&self) -> impl Iterator<Item = &WorldObject> {
        self.objects.iter()
    }

    pub fn object_mut(&mut self, id: EntityId) -> Option<&mut WorldObject> {
        self.objects.iter_mut().find(|object| object.id == id)
    }

    /// Looks up an object by id, restricted to `map`.
    pub fn object_on_map(&self, map: MapId, id: EntityId) -> Option<&WorldObject> {
        self.objects
            .iter()
            .find(|object| object.id == id && object.position.map == map)
    }

    /// Finishes every in-flight relocation. Returns how many actors arrived.
    pub fn complete_transits(&mut self) -> usize {
        self.actors
            .iter_mut()
            .map(ActorState::complete_transit)
            .filter(|arrived| *arrived)
            .count()
    }
}

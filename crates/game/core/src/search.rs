//! Nearby-entity queries around an actor.
//!
//! Searches are read-only: they never mutate the world and an empty result is
//! a normal answer, not an error. Matches come back in the world's enumeration
//! order with no ranking.

use crate::state::{ActorState, NpcFlags, ObjectKind, WorldObject, WorldState};

/// Radius query over the actors and objects of a [`WorldState`].
#[derive(Clone, Copy, Debug)]
pub struct VisibilitySearch<'s> {
    state: &'s WorldState,
}

impl<'s> VisibilitySearch<'s> {
    pub fn new(state: &'s WorldState) -> Self {
        Self { state }
    }

    /// Spawned objects of `kind` within `radius` of `origin`, on the same map.
    pub fn objects(
        &self,
        origin: &ActorState,
        radius: f32,
        kind: ObjectKind,
    ) -> Vec<&'s WorldObject> {
        if !is_valid_radius(radius) {
            return Vec::new();
        }

        self.state
            .objects()
            .filter(|object| object.is_spawned && object.kind == kind)
            .filter(|object| origin.position.is_within(&object.position, radius))
            .collect()
    }

    /// Living actors other than `origin` within `radius` of it, on the same map.
    pub fn actors(&self, origin: &ActorState, radius: f32) -> Vec<&'s ActorState> {
        if !is_valid_radius(radius) {
            return Vec::new();
        }

        self.state
            .actors()
            .filter(|actor| actor.id != origin.id && actor.is_alive())
            .filter(|actor| origin.position.is_within(&actor.position, radius))
            .collect()
    }

    /// Living NPCs offering every service in `services` within `radius` of `origin`.
    pub fn npcs(&self, origin: &ActorState, radius: f32, services: NpcFlags) -> Vec<&'s ActorState> {
        self.actors(origin, radius)
            .into_iter()
            .filter(|actor| actor.offers(services))
            .collect()
    }
}

fn is_valid_radius(radius: f32) -> bool {
    radius.is_finite() && radius > 0.0
}

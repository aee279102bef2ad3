//! World state touched by the summoning rules.
//!
//! The host simulation owns every actor and object. It lends them to the core
//! through [`WorldState`]; actions read flags and mutate actors exclusively via
//! the helpers on [`ActorState`].
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    AbilityId, ActorState, CompanionCommand, CompanionState, EntityId, GameTime, GroupId, ItemId,
    MapId, MotionOrder, NpcFlags, ObjectKind, Position, ReactState, ResourceMeter, SecurityLevel,
    WorldObject, WorldState,
};

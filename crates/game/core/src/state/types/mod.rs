pub mod actor;
pub mod common;
pub mod object;
pub mod world;

// Re-export actor types
pub use actor::{
    ActorState, CompanionCommand, CompanionState, MotionOrder, NpcFlags, ReactState,
};

// Re-export common types
pub use common::{
    AbilityId, EntityId, GameTime, GroupId, ItemId, MapId, Position, ResourceMeter,
    SecurityLevel,
};

// Re-export world object types
pub use object::{ObjectKind, WorldObject};

// Re-export the world container
pub use world::WorldState;

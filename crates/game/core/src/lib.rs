//! Summoning rules for automated companion bots.
//!
//! `summon-core` decides how a bot and its controller get brought together:
//! a direct pull for privileged controllers, otherwise a meeting stone or an
//! innkeeper with a hearthstone, in either direction. It also reacts to the
//! controller using a summoning ritual. The crate is pure: hosts lend it a
//! [`WorldState`] plus read-only oracles through [`Env`], and receive
//! structured reports and [`Notice`]s back.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod narration;
pub mod search;
pub mod state;

pub use action::{
    ActionContext, Attempt, BotAction, InnkeeperStrategy, LandingSpot, MeetingStoneStrategy,
    Mechanism, Outcome, Placement, PlacementError, RelocateAction, RelocationRequest,
    RitualJoinError, STRATEGIES, StrategyError, SummonAction, SummonError, SummonReport,
    SummonStrategy, UseMeetingStoneAction,
};
pub use config::{RevivePolicy, SummonConfig};
pub use env::{
    AbilityDefinition, AbilityOracle, ConfigOracle, Env, GameEnv, MapOracle, OracleError,
};
pub use error::{ErrorSeverity, GameError};
pub use narration::{Channel, NarrationLog, Narrator, Notice, Party};
pub use search::VisibilitySearch;
pub use state::{
    AbilityId, ActorState, CompanionCommand, CompanionState, EntityId, GameTime, GroupId, ItemId,
    MapId, MotionOrder, NpcFlags, ObjectKind, Position, ReactState, ResourceMeter, SecurityLevel,
    StateError, WorldObject, WorldState,
};

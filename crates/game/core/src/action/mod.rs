//! Summoning actions a bot can perform.
//!
//! # Module Structure
//!
//! - `error`: Action error types (PlacementError, StrategyError, SummonError, RitualJoinError)
//! - `placement`: Landing-spot sweep and the relocation itself
//! - `strategy`: In-world summon mechanisms (meeting stone, innkeeper + hearthstone)
//! - `summon`: Precedence-ordered selection across mechanisms
//! - `ritual`: Joining a summoning ritual the controller just used
//!
//! Every action takes the controller explicitly; nothing is looked up from
//! ambient context.

pub mod error;
pub mod placement;
pub mod ritual;
pub mod strategy;
pub mod summon;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{PlacementError, RitualJoinError, StrategyError, SummonError};
pub use placement::{
    LandingSpot, Placement, RelocateAction, RelocationRequest, SWEEP_DIRECTIONS, SWEEP_STEP,
    find_landing_spot, sweep_bearings,
};
pub use ritual::UseMeetingStoneAction;
pub use strategy::{
    InnkeeperStrategy, MeetingStoneStrategy, Mechanism, Outcome, STRATEGIES, SummonStrategy,
};
pub use summon::{Attempt, SummonAction, SummonReport};

use crate::env::GameEnv;
use crate::narration::Narrator;
use crate::state::WorldState;

/// Everything an action may touch during one invocation.
///
/// The world is borrowed mutably for the whole invocation, so no other action
/// on the same actors can interleave with it.
pub struct ActionContext<'a, 'e> {
    pub state: &'a mut WorldState,
    pub env: GameEnv<'e>,
    pub narrator: &'a mut dyn Narrator,
}

impl<'a, 'e> ActionContext<'a, 'e> {
    pub fn new(state: &'a mut WorldState, env: GameEnv<'e>, narrator: &'a mut dyn Narrator) -> Self {
        Self {
            state,
            env,
            narrator,
        }
    }
}

/// Defines how a bot action runs against the world.
pub trait BotAction {
    type Output;
    type Error;

    /// Short snake_case name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the action to completion. Failures leave no partial mutation
    /// unless the action documents otherwise.
    fn execute(&self, ctx: &mut ActionContext<'_, '_>) -> Result<Self::Output, Self::Error>;
}

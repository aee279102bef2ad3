//! Action execution errors.
//!
//! Errors related to placement, summon mechanisms, and ritual joins.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AbilityId, EntityId, GameTime, ObjectKind};

use super::strategy::{Mechanism, Outcome};
use super::summon::Attempt;

// ============================================================================
// Placement Errors
// ============================================================================

/// Errors that can occur while relocating a joiner next to a summoner.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// Either participant is already mid-relocation.
    #[error("actor {0} is already being relocated")]
    InTransit(EntityId),

    /// All swept bearings around the summoner are obstructed.
    #[error("no visible landing spot around summoner {summoner}")]
    NoLandingSpot { summoner: EntityId },

    /// The transit flag was raised between the check and the set.
    #[error("transit flag of actor {0} changed during relocation")]
    TransitRace(EntityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        use PlacementError::*;
        match self {
            ActorNotFound(_) => ErrorSeverity::Validation,
            InTransit(_) | NoLandingSpot { .. } => ErrorSeverity::Recoverable,
            TransitRace(_) => ErrorSeverity::Internal,
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use PlacementError::*;
        match self {
            ActorNotFound(_) => "PLACEMENT_ACTOR_NOT_FOUND",
            InTransit(_) => "PLACEMENT_IN_TRANSIT",
            NoLandingSpot { .. } => "PLACEMENT_NO_LANDING_SPOT",
            TransitRace(_) => "PLACEMENT_TRANSIT_RACE",
            Oracle(error) => error.error_code(),
        }
    }
}

// ============================================================================
// Strategy Errors
// ============================================================================

/// Why a single summon mechanism did not bring the pair together.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("no meeting stone near summoner {summoner}")]
    NoMeetingStone { summoner: EntityId },

    #[error("no innkeeper near summoner {summoner}")]
    NoInnkeeper { summoner: EntityId },

    /// The mechanism is switched off in configuration.
    #[error("mechanism is disabled")]
    Disabled,

    #[error("actor {joiner} carries no recall item")]
    MissingRecallItem { joiner: EntityId },

    #[error("recall ability of actor {joiner} is ready at {ready_at}")]
    RecallOnCooldown { joiner: EntityId, ready_at: GameTime },

    /// The host does not know the recall ability.
    #[error("ability {0:?} is not defined")]
    UnknownAbility(AbilityId),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl StrategyError {
    /// Coarse classification reported in the summon attempt log.
    pub fn outcome(&self) -> Outcome {
        use StrategyError::*;
        match self {
            ActorNotFound(_) | NoMeetingStone { .. } | NoInnkeeper { .. } => Outcome::NotFound,
            Disabled => Outcome::Disabled,
            MissingRecallItem { .. } | RecallOnCooldown { .. } | UnknownAbility(_) => {
                Outcome::Insufficient
            }
            Placement(_) | Oracle(_) => Outcome::Blocked,
        }
    }
}

impl GameError for StrategyError {
    fn severity(&self) -> ErrorSeverity {
        use StrategyError::*;
        match self {
            ActorNotFound(_) | Disabled => ErrorSeverity::Validation,
            NoMeetingStone { .. }
            | NoInnkeeper { .. }
            | MissingRecallItem { .. }
            | RecallOnCooldown { .. } => ErrorSeverity::Recoverable,
            UnknownAbility(_) => ErrorSeverity::Validation,
            Placement(error) => error.severity(),
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use StrategyError::*;
        match self {
            ActorNotFound(_) => "STRATEGY_ACTOR_NOT_FOUND",
            NoMeetingStone { .. } => "STRATEGY_NO_MEETING_STONE",
            NoInnkeeper { .. } => "STRATEGY_NO_INNKEEPER",
            Disabled => "STRATEGY_DISABLED",
            MissingRecallItem { .. } => "STRATEGY_MISSING_RECALL_ITEM",
            RecallOnCooldown { .. } => "STRATEGY_RECALL_ON_COOLDOWN",
            UnknownAbility(_) => "STRATEGY_UNKNOWN_ABILITY",
            Placement(error) => error.error_code(),
            Oracle(error) => error.error_code(),
        }
    }
}

// ============================================================================
// Summon Errors
// ============================================================================

/// Errors returned by [`SummonAction`](super::SummonAction).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SummonError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// Privileged direct summon could not place the bot.
    #[error("direct summon failed: {0}")]
    Direct(#[source] PlacementError),

    /// A mechanism hit an internal or host error; selection stopped there.
    #[error("{mechanism} summon aborted: {source}")]
    Aborted {
        mechanism: Mechanism,
        #[source]
        source: StrategyError,
    },

    /// Every mechanism was tried in both directions without success.
    #[error("every summon mechanism failed ({} attempts)", attempts.len())]
    Exhausted { attempts: Vec<Attempt> },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for SummonError {
    fn severity(&self) -> ErrorSeverity {
        use SummonError::*;
        match self {
            ActorNotFound(_) => ErrorSeverity::Validation,
            Direct(error) => error.severity(),
            Aborted { source, .. } => source.severity(),
            Exhausted { .. } => ErrorSeverity::Recoverable,
            Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use SummonError::*;
        match self {
            ActorNotFound(_) => "SUMMON_ACTOR_NOT_FOUND",
            Direct(_) => "SUMMON_DIRECT_FAILED",
            Aborted { .. } => "SUMMON_ABORTED",
            Exhausted { .. } => "SUMMON_EXHAUSTED",
            Oracle(error) => error.error_code(),
        }
    }
}

// ============================================================================
// Ritual Join Errors
// ============================================================================

/// Errors returned by [`UseMeetingStoneAction`](super::UseMeetingStoneAction).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RitualJoinError {
    #[error("bot has no controller")]
    NoController,

    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// The controller is interacting with someone else.
    #[error("controller targets {target}, not this bot")]
    TargetMismatch { target: EntityId },

    #[error("controller and bot are not in the same group")]
    NotInGroup,

    #[error("controller is being relocated")]
    ControllerInTransit,

    #[error("bot is in combat")]
    BotInCombat,

    #[error("object {0} not found on the controller's map")]
    ObjectNotFound(EntityId),

    #[error("object {object} is a {kind}, not a summoning ritual")]
    NotSummoningRitual { object: EntityId, kind: ObjectKind },

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

impl GameError for RitualJoinError {
    fn severity(&self) -> ErrorSeverity {
        use RitualJoinError::*;
        match self {
            NoController
            | ActorNotFound(_)
            | TargetMismatch { .. }
            | NotInGroup
            | ObjectNotFound(_)
            | NotSummoningRitual { .. } => ErrorSeverity::Validation,
            ControllerInTransit | BotInCombat => ErrorSeverity::Recoverable,
            Placement(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use RitualJoinError::*;
        match self {
            NoController => "RITUAL_NO_CONTROLLER",
            ActorNotFound(_) => "RITUAL_ACTOR_NOT_FOUND",
            TargetMismatch { .. } => "RITUAL_TARGET_MISMATCH",
            NotInGroup => "RITUAL_NOT_IN_GROUP",
            ControllerInTransit => "RITUAL_CONTROLLER_IN_TRANSIT",
            BotInCombat => "RITUAL_BOT_IN_COMBAT",
            ObjectNotFound(_) => "RITUAL_OBJECT_NOT_FOUND",
            NotSummoningRitual { .. } => "RITUAL_NOT_SUMMONING_RITUAL",
            Placement(error) => error.error_code(),
        }
    }
}

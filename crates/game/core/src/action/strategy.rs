//! In-world summon mechanisms.
//!
//! Each mechanism is a [`SummonStrategy`]: given a summoner/joiner pair it
//! looks for whatever in-world resource it needs, explains to the controller
//! what is missing, and otherwise hands over to [`RelocateAction`].

use crate::error::GameError;
use crate::narration::{Notice, Party};
use crate::search::VisibilitySearch;
use crate::state::{EntityId, NpcFlags, ObjectKind};

use super::{ActionContext, BotAction, Placement, RelocateAction, RelocationRequest, StrategyError};

/// Identity of a summon mechanism, for reports and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Mechanism {
    /// Privileged controller pulls the bot without any in-world resource.
    Direct,
    MeetingStone,
    Innkeeper,
}

/// Uniform result classification of a single mechanism attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Success,
    /// The required stone or NPC is not around.
    NotFound,
    /// The joiner lacks the item or the ability is cooling down.
    Insufficient,
    /// The resource was there but the relocation itself failed.
    Blocked,
    /// The mechanism is switched off.
    Disabled,
}

impl Outcome {
    pub fn of<T>(result: &Result<T, StrategyError>) -> Self {
        match result {
            Ok(_) => Outcome::Success,
            Err(error) => error.outcome(),
        }
    }
}

/// A way of bringing a joiner to a summoner.
pub trait SummonStrategy: Send + Sync {
    fn mechanism(&self) -> Mechanism;

    /// Tries the mechanism once. `controller` selects the narration wording.
    fn attempt(
        &self,
        ctx: &mut ActionContext<'_, '_>,
        controller: EntityId,
        request: RelocationRequest,
    ) -> Result<Placement, StrategyError>;
}

/// Mechanisms in precedence order.
pub static STRATEGIES: [&dyn SummonStrategy; 2] = [&MeetingStoneStrategy, &InnkeeperStrategy];

fn party(id: EntityId, controller: EntityId) -> Party {
    if id == controller {
        Party::Controller
    } else {
        Party::Bot
    }
}

/// Summon through a spawned meeting stone within sight of the summoner.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeetingStoneStrategy;

impl SummonStrategy for MeetingStoneStrategy {
    fn mechanism(&self) -> Mechanism {
        Mechanism::MeetingStone
    }

    fn attempt(
        &self,
        ctx: &mut ActionContext<'_, '_>,
        controller: EntityId,
        request: RelocationRequest,
    ) -> Result<Placement, StrategyError> {
        let config = ctx.env.summon_config()?;
        let summoner = ctx
            .state
            .actor(request.summoner)
            .ok_or(StrategyError::ActorNotFound(request.summoner))?;

        let has_stone = !VisibilitySearch::new(ctx.state)
            .objects(summoner, config.sight_distance, ObjectKind::MeetingStone)
            .is_empty();

        if !has_stone {
            ctx.narrator.tell_error(Notice::NoMeetingStone {
                summoner: party(request.summoner, controller),
            });
            return Err(StrategyError::NoMeetingStone {
                summoner: request.summoner,
            });
        }

        Ok(RelocateAction::new(Some(controller), request).execute(ctx)?)
    }
}

/// Summon at an innkeeper, spending the joiner's recall ability.
///
/// The recall cooldown is started as soon as the joiner passes the item and
/// readiness checks, before the relocation is attempted. A relocation that
/// then fails still leaves the ability cooling down.
#[derive(Clone, Copy, Debug, Default)]
pub struct InnkeeperStrategy;

impl SummonStrategy for InnkeeperStrategy {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Innkeeper
    }

    fn attempt(
        &self,
        ctx: &mut ActionContext<'_, '_>,
        controller: EntityId,
        request: RelocationRequest,
    ) -> Result<Placement, StrategyError> {
        let config = ctx.env.summon_config()?;
        if !config.summon_at_innkeepers {
            return Err(StrategyError::Disabled);
        }

        let summoner = ctx
            .state
            .actor(request.summoner)
            .ok_or(StrategyError::ActorNotFound(request.summoner))?;
        let has_innkeeper = !VisibilitySearch::new(ctx.state)
            .npcs(summoner, config.sight_distance, NpcFlags::INNKEEPER)
            .is_empty();

        if !has_innkeeper {
            ctx.narrator.tell_error(Notice::NoInnkeeper {
                summoner: party(request.summoner, controller),
            });
            return Err(StrategyError::NoInnkeeper {
                summoner: request.summoner,
            });
        }

        let now = ctx.state.clock;
        let joiner = ctx
            .state
            .actor(request.joiner)
            .ok_or(StrategyError::ActorNotFound(request.joiner))?;
        let joiner_party = party(request.joiner, controller);

        if !joiner.has_item_count(config.recall_item, 1) {
            ctx.narrator
                .tell_error(Notice::NoRecallItem { joiner: joiner_party });
            return Err(StrategyError::MissingRecallItem {
                joiner: request.joiner,
            });
        }

        if let Some(ready_at) = joiner
            .cooldowns
            .get(&config.recall_ability)
            .copied()
            .filter(|_| joiner.is_on_cooldown(config.recall_ability, now))
        {
            ctx.narrator
                .tell_error(Notice::RecallNotReady { joiner: joiner_party });
            return Err(StrategyError::RecallOnCooldown {
                joiner: request.joiner,
                ready_at,
            });
        }

        let ability = ctx
            .env
            .abilities()?
            .ability(config.recall_ability)
            .ok_or(StrategyError::UnknownAbility(config.recall_ability))?;

        ctx.state
            .actor_mut(request.joiner)
            .ok_or(StrategyError::ActorNotFound(request.joiner))?
            .start_cooldown(ability.id, now + ability.cooldown_ms);

        Ok(RelocateAction::new(Some(controller), request).execute(ctx)?)
    }
}

/// Returns true when a failed attempt must stop the whole selection.
pub(crate) fn is_abort(error: &StrategyError) -> bool {
    error.severity().is_internal()
}

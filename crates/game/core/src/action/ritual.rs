//! Joining a summoning ritual the controller just used.

use crate::narration::Notice;
use crate::state::EntityId;

use super::{ActionContext, BotAction, Placement, RelocateAction, RelocationRequest, RitualJoinError};

/// Bot reaction to its controller using a summoning-ritual object.
///
/// Every precondition is checked before anything is mutated. Only the
/// in-combat refusal is narrated; the other refusals are silent because the
/// controller may simply have been using the object for someone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseMeetingStoneAction {
    pub controller: Option<EntityId>,
    pub bot: EntityId,
    pub object: EntityId,
}

impl UseMeetingStoneAction {
    pub fn new(controller: Option<EntityId>, bot: EntityId, object: EntityId) -> Self {
        Self {
            controller,
            bot,
            object,
        }
    }
}

impl BotAction for UseMeetingStoneAction {
    type Output = Placement;
    type Error = RitualJoinError;

    fn name(&self) -> &'static str {
        "use_meeting_stone"
    }

    fn execute(&self, ctx: &mut ActionContext<'_, '_>) -> Result<Placement, RitualJoinError> {
        let controller_id = self.controller.ok_or(RitualJoinError::NoController)?;
        let controller = ctx
            .state
            .actor(controller_id)
            .ok_or(RitualJoinError::ActorNotFound(controller_id))?;
        let bot = ctx
            .state
            .actor(self.bot)
            .ok_or(RitualJoinError::ActorNotFound(self.bot))?;

        match controller.target {
            Some(target) if target != self.bot => {
                return Err(RitualJoinError::TargetMismatch { target });
            }
            Some(_) => {}
            None if !controller.shares_group_with(bot) => {
                return Err(RitualJoinError::NotInGroup);
            }
            None => {}
        }

        if controller.in_transit {
            return Err(RitualJoinError::ControllerInTransit);
        }

        if bot.in_combat {
            ctx.narrator.tell_error(Notice::InCombat);
            return Err(RitualJoinError::BotInCombat);
        }

        let object = ctx
            .state
            .object_on_map(controller.position.map, self.object)
            .ok_or(RitualJoinError::ObjectNotFound(self.object))?;
        if !object.kind.is_summoning_ritual() {
            return Err(RitualJoinError::NotSummoningRitual {
                object: self.object,
                kind: object.kind,
            });
        }

        let request = RelocationRequest::new(controller_id, self.bot);
        Ok(RelocateAction::new(self.controller, request).execute(ctx)?)
    }
}

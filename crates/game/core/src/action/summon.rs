//! Precedence-ordered summon selection.

use crate::narration::Notice;
use crate::state::EntityId;

use super::strategy::is_abort;
use super::{
    ActionContext, BotAction, Mechanism, Outcome, Placement, RelocateAction, RelocationRequest,
    STRATEGIES, StrategyError, SummonError,
};

/// One failed mechanism attempt, in the order it was tried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub mechanism: Mechanism,
    pub request: RelocationRequest,
    pub outcome: Outcome,
    pub failure: StrategyError,
}

/// Result of a successful summon.
#[derive(Clone, Debug, PartialEq)]
pub struct SummonReport {
    pub mechanism: Mechanism,
    pub placement: Placement,
    /// Failed attempts that preceded the successful one.
    pub attempts: Vec<Attempt>,
}

/// Brings a bot and its controller together.
///
/// A controller at or above the configured security threshold pulls the bot
/// directly. Everyone else goes through the in-world mechanisms, first with
/// the controller as summoner and then with the bot as summoner. Each
/// mechanism is tried at most once per direction and the first success wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummonAction {
    pub controller: EntityId,
    pub bot: EntityId,
}

impl SummonAction {
    pub fn new(controller: EntityId, bot: EntityId) -> Self {
        Self { controller, bot }
    }
}

impl BotAction for SummonAction {
    type Output = SummonReport;
    type Error = SummonError;

    fn name(&self) -> &'static str {
        "summon"
    }

    fn execute(&self, ctx: &mut ActionContext<'_, '_>) -> Result<SummonReport, SummonError> {
        let controller_security = ctx
            .state
            .actor(self.controller)
            .ok_or(SummonError::ActorNotFound(self.controller))?
            .security;
        let bot = ctx
            .state
            .actor_mut(self.bot)
            .ok_or(SummonError::ActorNotFound(self.bot))?;
        if let Some(companion) = bot.companion.as_mut() {
            companion.stand_down();
        }

        let config = ctx.env.summon_config()?;
        let bring_bot = RelocationRequest::new(self.controller, self.bot);

        if controller_security >= config.direct_summon_security {
            let placement = RelocateAction::new(Some(self.controller), bring_bot)
                .execute(ctx)
                .map_err(SummonError::Direct)?;
            return Ok(SummonReport {
                mechanism: Mechanism::Direct,
                placement,
                attempts: Vec::new(),
            });
        }

        let directions = [
            (bring_bot, Notice::Hello),
            (bring_bot.reversed(), Notice::Welcome),
        ];
        let mut attempts = Vec::new();

        for (request, greeting) in directions {
            for strategy in STRATEGIES.iter() {
                let mechanism = strategy.mechanism();
                match strategy.attempt(ctx, self.controller, request) {
                    Ok(placement) => {
                        ctx.narrator.tell_master(greeting);
                        return Ok(SummonReport {
                            mechanism,
                            placement,
                            attempts,
                        });
                    }
                    Err(failure) if is_abort(&failure) => {
                        return Err(SummonError::Aborted {
                            mechanism,
                            source: failure,
                        });
                    }
                    Err(failure) => attempts.push(Attempt {
                        mechanism,
                        request,
                        outcome: failure.outcome(),
                        failure,
                    }),
                }
            }
        }

        Err(SummonError::Exhausted { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::fixtures::{BOT, CONTROLLER, Fixture, OpenMap};
    use crate::action::{PlacementError, SWEEP_DIRECTIONS};
    use crate::env::OracleError;
    use crate::narration::{Channel, Party};
    use crate::state::{
        ActorState, CompanionCommand, CompanionState, EntityId, NpcFlags, ObjectKind,
        ReactState, SecurityLevel, WorldObject,
    };

    const STONE: EntityId = EntityId(50);
    const INNKEEPER: EntityId = EntityId(60);

    fn summon() -> SummonAction {
        SummonAction::new(CONTROLLER, BOT)
    }

    fn stone_near(fixture: &mut Fixture, anchor: EntityId) {
        let at = fixture.world.actor(anchor).unwrap().position.offset(0.0, 50.0);
        fixture
            .world
            .insert_object(WorldObject::new(STONE, ObjectKind::MeetingStone, at))
            .unwrap();
    }

    fn innkeeper_near(fixture: &mut Fixture, anchor: EntityId) {
        let at = fixture.world.actor(anchor).unwrap().position.offset(2.0, 6.0);
        fixture
            .world
            .insert_actor(ActorState::new(INNKEEPER, at, 500).with_npc_flags(NpcFlags::INNKEEPER))
            .unwrap();
    }

    fn hearthstone(fixture: &mut Fixture, holder: EntityId) {
        let item = fixture.config.recall_item;
        fixture.world.actor_mut(holder).unwrap().inventory.insert(item, 1);
    }

    #[test]
    fn meeting_stone_wins_over_innkeeper() {
        let mut fixture = Fixture::new();
        stone_near(&mut fixture, CONTROLLER);
        innkeeper_near(&mut fixture, CONTROLLER);
        hearthstone(&mut fixture, BOT);

        let report = fixture.run(&summon()).unwrap();

        assert_eq!(report.mechanism, Mechanism::MeetingStone);
        assert!(report.attempts.is_empty());
        // The innkeeper was never tried, so the recall is still ready.
        assert!(fixture.bot().cooldowns.is_empty());
        assert_eq!(
            fixture.narration.entries(),
            &[(Channel::Master, Notice::Hello)]
        );
    }

    #[test]
    fn falls_through_to_innkeeper_when_no_stone() {
        let mut fixture = Fixture::new();
        innkeeper_near(&mut fixture, CONTROLLER);
        hearthstone(&mut fixture, BOT);

        let report = fixture.run(&summon()).unwrap();

        assert_eq!(report.mechanism, Mechanism::Innkeeper);
        assert_eq!(report.attempts.len(), 1);
        assert_eq!(report.attempts[0].mechanism, Mechanism::MeetingStone);
        assert_eq!(report.attempts[0].outcome, Outcome::NotFound);
        assert_eq!(fixture.bot().position, report.placement.destination());
        assert!(fixture.narration.contains(Notice::Hello));
    }

    #[test]
    fn reverse_direction_brings_controller_to_the_bot() {
        let mut fixture = Fixture::new();
        stone_near(&mut fixture, BOT);
        let bot_position = fixture.bot().position;

        let report = fixture.run(&summon()).unwrap();

        assert_eq!(report.mechanism, Mechanism::MeetingStone);
        assert_eq!(report.placement.request, RelocationRequest::new(BOT, CONTROLLER));
        assert_eq!(fixture.bot().position, bot_position);
        assert_eq!(fixture.controller().position, report.placement.destination());
        assert!(fixture.narration.contains(Notice::Welcome));
        assert!(!fixture.narration.contains(Notice::Hello));
    }

    #[test]
    fn nothing_nearby_narrates_each_reason_once() {
        let mut fixture = Fixture::new();
        let before = fixture.world.clone();

        let err = fixture.run(&summon()).unwrap_err();

        let SummonError::Exhausted { attempts } = err else {
            panic!("expected exhaustion");
        };
        let outcomes: Vec<_> = attempts.iter().map(|a| (a.mechanism, a.outcome)).collect();
        assert_eq!(
            outcomes,
            vec![
                (Mechanism::MeetingStone, Outcome::NotFound),
                (Mechanism::Innkeeper, Outcome::NotFound),
                (Mechanism::MeetingStone, Outcome::NotFound),
                (Mechanism::Innkeeper, Outcome::NotFound),
            ]
        );
        assert_eq!(
            fixture.narration.errors().collect::<Vec<_>>(),
            vec![
                Notice::NoMeetingStone {
                    summoner: Party::Controller
                },
                Notice::NoInnkeeper {
                    summoner: Party::Controller
                },
                Notice::NoMeetingStone {
                    summoner: Party::Bot
                },
                Notice::NoInnkeeper {
                    summoner: Party::Bot
                },
            ]
        );
        assert_eq!(fixture.world, before);
    }

    #[test]
    fn missing_hearthstones_are_reported_per_joiner() {
        let mut fixture = Fixture::new();
        // Within sight of both the controller and the bot.
        innkeeper_near(&mut fixture, CONTROLLER);

        let err = fixture.run(&summon()).unwrap_err();

        assert!(matches!(err, SummonError::Exhausted { .. }));
        assert!(fixture.narration.contains(Notice::NoRecallItem { joiner: Party::Bot }));
        assert!(fixture.narration.contains(Notice::NoRecallItem {
            joiner: Party::Controller
        }));
    }

    #[test]
    fn cooldown_is_spent_even_when_every_placement_fails() {
        let mut fixture = Fixture::new();
        innkeeper_near(&mut fixture, CONTROLLER);
        hearthstone(&mut fixture, BOT);
        fixture.map = OpenMap::blocking((0..SWEEP_DIRECTIONS).collect());

        let err = fixture.run(&summon()).unwrap_err();

        let SummonError::Exhausted { attempts } = err else {
            panic!("expected exhaustion");
        };
        assert_eq!(attempts[1].mechanism, Mechanism::Innkeeper);
        assert_eq!(attempts[1].outcome, Outcome::Blocked);
        assert_eq!(
            attempts[1].failure,
            StrategyError::Placement(PlacementError::NoLandingSpot { summoner: CONTROLLER })
        );
        let recall = fixture.config.recall_ability;
        assert!(fixture.bot().is_on_cooldown(recall, fixture.world.clock));
        assert_eq!(fixture.bot().position.x, 30.0);
    }

    #[test]
    fn privileged_controller_pulls_the_bot_directly() {
        let mut fixture = Fixture::new();
        fixture.world.actor_mut(CONTROLLER).unwrap().security = SecurityLevel::GameMaster;

        let report = fixture.run(&summon()).unwrap();

        assert_eq!(report.mechanism, Mechanism::Direct);
        assert_eq!(fixture.bot().position, report.placement.destination());
        assert!(fixture.narration.errors().next().is_none());
    }

    #[test]
    fn threshold_is_configurable() {
        let mut fixture = Fixture::new();
        fixture.config = fixture
            .config
            .with_direct_summon_security(SecurityLevel::Player);

        let report = fixture.run(&summon()).unwrap();

        assert_eq!(report.mechanism, Mechanism::Direct);
    }

    #[test]
    fn direct_summon_failure_does_not_fall_back() {
        let mut fixture = Fixture::new();
        fixture.world.actor_mut(CONTROLLER).unwrap().security = SecurityLevel::Administrator;
        stone_near(&mut fixture, CONTROLLER);
        fixture.world.actor_mut(BOT).unwrap().in_transit = true;

        let err = fixture.run(&summon()).unwrap_err();

        assert_eq!(err, SummonError::Direct(PlacementError::InTransit(BOT)));
    }

    #[test]
    fn companion_stands_down_whatever_the_outcome() {
        let mut fixture = Fixture::new();
        fixture.world.actor_mut(BOT).unwrap().companion = Some(CompanionState::new(EntityId(99)));

        assert!(fixture.run(&summon()).is_err());

        let companion = fixture.bot().companion.unwrap();
        assert_eq!(companion.react_state, ReactState::Passive);
        assert_eq!(companion.command, CompanionCommand::Stay);
    }

    #[test]
    fn missing_config_is_reported() {
        struct Unconfigured;
        impl BotAction for Unconfigured {
            type Output = SummonReport;
            type Error = SummonError;
            fn name(&self) -> &'static str {
                "unconfigured"
            }
            fn execute(
                &self,
                ctx: &mut ActionContext<'_, '_>,
            ) -> Result<SummonReport, SummonError> {
                ctx.env = crate::env::Env::new(ctx.env.map().ok(), ctx.env.abilities().ok(), None);
                summon().execute(ctx)
            }
        }

        let mut fixture = Fixture::new();
        let err = fixture.run(&Unconfigured).unwrap_err();

        assert_eq!(err, SummonError::Oracle(OracleError::ConfigNotAvailable));
    }

    #[test]
    fn unknown_actor_is_rejected() {
        let mut fixture = Fixture::new();

        let err = fixture
            .run(&SummonAction::new(CONTROLLER, EntityId(404)))
            .unwrap_err();

        assert_eq!(err, SummonError::ActorNotFound(EntityId(404)));
    }
}

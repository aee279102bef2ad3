//! Landing-spot resolution and relocation.
//!
//! The joiner lands at a fixed distance from the summoner. Candidate bearings
//! form a ring of eight directions centred on the joiner's follow angle,
//! starting half a turn behind it and stepping an eighth of a turn each
//! time. The first bearing the summoner can see is taken; there is no
//! scoring of candidates.

use std::f32::consts::{FRAC_PI_4, PI};

use arrayvec::ArrayVec;

use crate::config::RevivePolicy;
use crate::env::MapOracle;
use crate::narration::Notice;
use crate::state::{EntityId, Position, WorldState};

use super::{ActionContext, BotAction, PlacementError};

/// Number of bearings tried around the summoner.
pub const SWEEP_DIRECTIONS: usize = 8;

/// Angular step between consecutive bearings.
pub const SWEEP_STEP: f32 = FRAC_PI_4;

/// Who lands where: the joiner is moved next to the summoner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelocationRequest {
    pub summoner: EntityId,
    pub joiner: EntityId,
}

impl RelocationRequest {
    pub fn new(summoner: EntityId, joiner: EntityId) -> Self {
        Self { summoner, joiner }
    }

    /// Same pair with the roles swapped.
    pub fn reversed(self) -> Self {
        Self {
            summoner: self.joiner,
            joiner: self.summoner,
        }
    }
}

/// A visible candidate point picked by the sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingSpot {
    /// Position of the bearing in sweep order (0-based).
    pub sweep_index: usize,
    pub bearing: f32,
    pub destination: Position,
}

/// Result of a successful relocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub request: RelocationRequest,
    pub spot: LandingSpot,
    /// True when the joiner was dead and came back on arrival.
    pub revived: bool,
}

impl Placement {
    pub fn destination(&self) -> Position {
        self.spot.destination
    }
}

/// Candidate bearings in sweep order for a given reference angle.
///
/// Starts at `reference - π`; the closing bearing `reference + π` points the
/// same way as the first one and is therefore not repeated.
pub fn sweep_bearings(reference: f32) -> ArrayVec<f32, SWEEP_DIRECTIONS> {
    (0..SWEEP_DIRECTIONS)
        .map(|step| reference - PI + step as f32 * SWEEP_STEP)
        .collect()
}

/// Returns the first swept point at `distance` from `origin` that `origin` can see.
pub fn find_landing_spot<M>(
    map: &M,
    origin: &Position,
    reference: f32,
    distance: f32,
) -> Option<LandingSpot>
where
    M: MapOracle + ?Sized,
{
    sweep_bearings(reference)
        .into_iter()
        .enumerate()
        .map(|(sweep_index, bearing)| LandingSpot {
            sweep_index,
            bearing,
            destination: origin.offset(bearing, distance),
        })
        .find(|spot| map.is_within_los(origin, &spot.destination))
}

/// Moves the joiner next to the summoner, reviving it on arrival when allowed.
///
/// # Invariants
///
/// - Nothing is mutated when either participant is already in transit.
/// - Nothing is mutated when no swept bearing is visible.
/// - Revive and repair only happen together with a successful relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelocateAction {
    /// Controller whose safety gates the revive-on-arrival policy.
    pub controller: Option<EntityId>,
    pub request: RelocationRequest,
}

impl RelocateAction {
    pub fn new(controller: Option<EntityId>, request: RelocationRequest) -> Self {
        Self {
            controller,
            request,
        }
    }

    fn revive_allowed(&self, state: &WorldState, policy: RevivePolicy) -> bool {
        match policy {
            RevivePolicy::Never => false,
            RevivePolicy::Always => true,
            RevivePolicy::WhenControllerSafe => self
                .controller
                .and_then(|id| state.actor(id))
                .is_some_and(|controller| controller.is_alive() && !controller.in_combat),
        }
    }
}

impl BotAction for RelocateAction {
    type Output = Placement;
    type Error = PlacementError;

    fn name(&self) -> &'static str {
        "relocate"
    }

    fn execute(&self, ctx: &mut ActionContext<'_, '_>) -> Result<Placement, PlacementError> {
        let RelocationRequest { summoner, joiner } = self.request;

        let summoner_state = ctx
            .state
            .actor(summoner)
            .ok_or(PlacementError::ActorNotFound(summoner))?;
        let joiner_state = ctx
            .state
            .actor(joiner)
            .ok_or(PlacementError::ActorNotFound(joiner))?;

        if summoner_state.in_transit {
            return Err(PlacementError::InTransit(summoner));
        }
        if joiner_state.in_transit {
            return Err(PlacementError::InTransit(joiner));
        }

        let config = ctx.env.summon_config()?;
        let map = ctx.env.map()?;

        let spot = find_landing_spot(
            map,
            &summoner_state.position,
            joiner_state.follow_angle,
            config.follow_distance,
        );
        let Some(spot) = spot else {
            ctx.narrator.tell_error(Notice::NotEnoughPlace);
            return Err(PlacementError::NoLandingSpot { summoner });
        };

        let revive =
            joiner_state.is_dead() && self.revive_allowed(ctx.state, config.revive_policy);

        let joiner_state = ctx
            .state
            .actor_mut(joiner)
            .ok_or(PlacementError::ActorNotFound(joiner))?;
        if !joiner_state.begin_transit(spot.destination) {
            return Err(PlacementError::TransitRace(joiner));
        }
        joiner_state.clear_motion();
        if revive {
            joiner_state.resurrect();
            joiner_state.repair_all();
            ctx.narrator.tell_master(Notice::Revived);
        }

        Ok(Placement {
            request: self.request,
            spot,
            revived: revive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::fixtures::{BOT, CONTROLLER, Fixture, OpenMap};
    use crate::config::SummonConfig;
    use crate::narration::Channel;
    use crate::state::{MotionOrder, ResourceMeter};

    fn bring_bot() -> RelocateAction {
        RelocateAction::new(Some(CONTROLLER), RelocationRequest::new(CONTROLLER, BOT))
    }

    #[test]
    fn sweep_starts_behind_reference_and_steps_eighth_turns() {
        let bearings = sweep_bearings(0.5);

        assert_eq!(bearings.len(), SWEEP_DIRECTIONS);
        assert!((bearings[0] - (0.5 - PI)).abs() < 1e-6);
        for pair in bearings.windows(2) {
            assert!((pair[1] - pair[0] - SWEEP_STEP).abs() < 1e-6);
        }
        // The last bearing sits one step short of a full turn past the first.
        assert!((bearings[7] - (0.5 + PI - SWEEP_STEP)).abs() < 1e-5);
    }

    #[test]
    fn lands_at_follow_distance_on_first_visible_bearing() {
        let mut fixture = Fixture::new();
        // Block the first two bearings (behind and behind-right of the reference).
        fixture.map = OpenMap::blocking(vec![0, 1]);
        let origin = fixture.controller().position;

        let placement = fixture.run(&bring_bot()).expect("placement succeeds");

        assert_eq!(placement.spot.sweep_index, 2);
        let bot = fixture.bot();
        assert_eq!(bot.position, placement.destination());
        assert_eq!(bot.position.map, origin.map);
        assert_eq!(bot.position.z, origin.z);
        let distance = origin.distance(&bot.position).unwrap();
        assert!((distance - SummonConfig::DEFAULT_FOLLOW_DISTANCE).abs() < 1e-4);
        assert!(bot.in_transit);
        assert_eq!(bot.motion, MotionOrder::Idle);
    }

    #[test]
    fn fully_obstructed_ring_fails_without_moving_anyone() {
        let mut fixture = Fixture::new();
        fixture.map = OpenMap::blocking((0..SWEEP_DIRECTIONS).collect());
        let before = fixture.world.clone();

        let err = fixture.run(&bring_bot()).unwrap_err();

        assert_eq!(err, PlacementError::NoLandingSpot { summoner: CONTROLLER });
        assert_eq!(fixture.world, before);
        assert_eq!(
            fixture.narration.entries(),
            &[(Channel::Error, Notice::NotEnoughPlace)]
        );
    }

    #[test]
    fn transit_on_either_side_is_a_silent_no_op() {
        for in_transit in [CONTROLLER, BOT] {
            let mut fixture = Fixture::new();
            fixture.world.actor_mut(in_transit).unwrap().in_transit = true;
            let before = fixture.world.clone();

            let err = fixture.run(&bring_bot()).unwrap_err();

            assert_eq!(err, PlacementError::InTransit(in_transit));
            assert_eq!(fixture.world, before);
            assert!(fixture.narration.is_empty());
        }
    }

    #[test]
    fn dead_joiner_is_revived_and_repaired_when_controller_is_safe() {
        let mut fixture = Fixture::new();
        {
            let bot = fixture.world.actor_mut(BOT).unwrap();
            bot.health.current = 0;
            bot.resurrection_sickness = true;
            bot.equipment = vec![ResourceMeter::new(3, 60)];
        }

        let placement = fixture.run(&bring_bot()).unwrap();

        assert!(placement.revived);
        let bot = fixture.bot();
        assert!(bot.health.is_full());
        assert!(!bot.resurrection_sickness);
        assert!(bot.equipment.iter().all(ResourceMeter::is_full));
        assert!(fixture.narration.contains(Notice::Revived));
    }

    #[test]
    fn controller_in_combat_blocks_safe_revive_but_not_always() {
        for (policy, expect_revive) in [
            (RevivePolicy::WhenControllerSafe, false),
            (RevivePolicy::Always, true),
            (RevivePolicy::Never, false),
        ] {
            let mut fixture = Fixture::new();
            fixture.config = fixture.config.with_revive_policy(policy);
            fixture.world.actor_mut(CONTROLLER).unwrap().in_combat = true;
            fixture.world.actor_mut(BOT).unwrap().health.current = 0;

            let placement = fixture.run(&bring_bot()).unwrap();

            assert_eq!(placement.revived, expect_revive, "policy {policy}");
            assert_eq!(fixture.bot().is_alive(), expect_revive);
        }
    }

    #[test]
    fn dead_controller_blocks_safe_revive() {
        let mut fixture = Fixture::new();
        fixture.world.actor_mut(CONTROLLER).unwrap().health.current = 0;
        fixture.world.actor_mut(BOT).unwrap().health.current = 0;

        let placement = fixture.run(&bring_bot()).unwrap();

        assert!(!placement.revived);
        assert!(fixture.bot().is_dead());
        assert!(!fixture.narration.contains(Notice::Revived));
    }

    #[test]
    fn sweep_is_centred_on_joiner_follow_angle() {
        let mut fixture = Fixture::new();
        fixture.world.actor_mut(BOT).unwrap().follow_angle = FRAC_PI_4;
        // First bearing for a follow angle of 45 degrees points south-west.
        fixture.map = OpenMap::blocking_bearings(vec![-3.0 * FRAC_PI_4]);

        let placement = fixture.run(&bring_bot()).unwrap();

        assert_eq!(placement.spot.sweep_index, 1);
        assert!((placement.spot.bearing + 2.0 * FRAC_PI_4).abs() < 1e-5);
        let destination = placement.destination();
        assert!(destination.x.abs() < 1e-4);
        assert!((destination.y + SummonConfig::DEFAULT_FOLLOW_DISTANCE).abs() < 1e-4);
    }

    #[test]
    fn living_joiner_is_never_revived() {
        let mut fixture = Fixture::new();
        fixture.config = fixture.config.with_revive_policy(RevivePolicy::Always);
        fixture.world.actor_mut(BOT).unwrap().equipment = vec![ResourceMeter::new(1, 10)];

        let placement = fixture.run(&bring_bot()).unwrap();

        assert!(!placement.revived);
        assert_eq!(fixture.bot().equipment, vec![ResourceMeter::new(1, 10)]);
        assert!(!fixture.narration.contains(Notice::Revived));
    }

    #[test]
    fn failed_placement_never_revives() {
        let mut fixture = Fixture::new();
        fixture.config = fixture.config.with_revive_policy(RevivePolicy::Always);
        fixture.map = OpenMap::blocking((0..SWEEP_DIRECTIONS).collect());
        fixture.world.actor_mut(BOT).unwrap().health.current = 0;

        assert!(fixture.run(&bring_bot()).is_err());
        assert!(fixture.bot().is_dead());
    }
}

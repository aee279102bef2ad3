//! Shared test world for the action modules.

use std::collections::HashMap;
use std::f32::consts::PI;

use crate::action::{ActionContext, BotAction, sweep_bearings};
use crate::config::SummonConfig;
use crate::env::{AbilityDefinition, AbilityOracle, ConfigOracle, Env, MapOracle};
use crate::narration::NarrationLog;
use crate::state::{
    AbilityId, ActorState, EntityId, GameTime, GroupId, MapId, Position, WorldState,
};

pub(crate) const CONTROLLER: EntityId = EntityId(1);
pub(crate) const BOT: EntityId = EntityId(2);

pub(crate) const RECALL_COOLDOWN_MS: u64 = 60 * 60 * 1000;

/// Map with no walls except the swept bearings listed in `blocked`.
///
/// Bearings are matched by angle from the viewer, using the sweep for a
/// reference angle of zero.
#[derive(Clone, Debug, Default)]
pub(crate) struct OpenMap {
    blocked: Vec<f32>,
}

impl OpenMap {
    pub(crate) fn blocking(sweep_indices: Vec<usize>) -> Self {
        let bearings = sweep_bearings(0.0);
        Self {
            blocked: sweep_indices.into_iter().map(|index| bearings[index]).collect(),
        }
    }

    pub(crate) fn blocking_bearings(blocked: Vec<f32>) -> Self {
        Self { blocked }
    }
}

impl MapOracle for OpenMap {
    fn is_within_los(&self, from: &Position, to: &Position) -> bool {
        if from.map != to.map {
            return false;
        }
        let bearing = (to.y - from.y).atan2(to.x - from.x);
        !self.blocked.iter().any(|blocked| {
            let diff = (bearing - blocked).rem_euclid(2.0 * PI);
            diff < 1e-3 || 2.0 * PI - diff < 1e-3
        })
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct AbilityTable(pub HashMap<AbilityId, AbilityDefinition>);

impl AbilityOracle for AbilityTable {
    fn ability(&self, id: AbilityId) -> Option<AbilityDefinition> {
        self.0.get(&id).copied()
    }
}

pub(crate) struct StaticConfig(pub SummonConfig);

impl ConfigOracle for StaticConfig {
    fn summon_config(&self) -> SummonConfig {
        self.0
    }
}

pub(crate) struct Fixture {
    pub world: WorldState,
    pub map: OpenMap,
    pub abilities: AbilityTable,
    pub config: SummonConfig,
    pub narration: NarrationLog,
}

impl Fixture {
    /// Controller at the origin and bot 30 yards east, same group, same map.
    pub(crate) fn new() -> Self {
        let mut world = WorldState::new(GameTime(10_000));
        world
            .insert_actor(
                ActorState::new(CONTROLLER, Position::new(MapId(0), 0.0, 0.0, 5.0), 100)
                    .with_group(GroupId(1)),
            )
            .expect("controller registers");
        world
            .insert_actor(
                ActorState::new(BOT, Position::new(MapId(0), 30.0, 0.0, 5.0), 100)
                    .with_group(GroupId(1)),
            )
            .expect("bot registers");

        let recall = SummonConfig::DEFAULT_RECALL_ABILITY;
        let mut abilities = HashMap::new();
        abilities.insert(recall, AbilityDefinition::new(recall, RECALL_COOLDOWN_MS));

        Self {
            world,
            map: OpenMap::default(),
            abilities: AbilityTable(abilities),
            config: SummonConfig::default(),
            narration: NarrationLog::new(),
        }
    }

    pub(crate) fn controller(&self) -> &ActorState {
        self.world.actor(CONTROLLER).expect("controller exists")
    }

    pub(crate) fn bot(&self) -> &ActorState {
        self.world.actor(BOT).expect("bot exists")
    }

    pub(crate) fn run<A: BotAction>(&mut self, action: &A) -> Result<A::Output, A::Error> {
        let config = StaticConfig(self.config);
        let env = Env::with_all(&self.map, &self.abilities, &config);
        let mut ctx = ActionContext::new(&mut self.world, env.as_game_env(), &mut self.narration);
        action.execute(&mut ctx)
    }
}

//! Bot dispatcher.
//!
//! [`BotRuntime`] owns the world and the oracles, runs one core action per
//! command or event, and keeps the narration produced along the way.

use summon_content::Scenario;
use summon_core::{
    ActionContext, BotAction, Channel, GameError, GameTime, NarrationLog, Notice, Placement,
    SummonAction, SummonConfig, SummonError, SummonReport, UseMeetingStoneAction, WorldState,
};

use crate::api::{BotCommand, Result, RuntimeError, WorldEvent};
use crate::oracle::OracleManager;

/// Single-threaded host around the summoning rules.
///
/// Every command runs to completion against `&mut WorldState` before the next
/// one starts, so transit and cooldown checks never interleave.
pub struct BotRuntime {
    state: WorldState,
    oracles: OracleManager,
    narration: NarrationLog,
}

impl BotRuntime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn new(state: WorldState, oracles: OracleManager) -> Self {
        Self {
            state,
            oracles,
            narration: NarrationLog::new(),
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    pub fn config(&self) -> SummonConfig {
        self.oracles.config()
    }

    pub fn narration(&self) -> &NarrationLog {
        &self.narration
    }

    /// Takes everything said since the last drain.
    pub fn drain_narration(&mut self) -> Vec<(Channel, Notice)> {
        self.narration.drain()
    }

    fn run<A>(&mut self, action: &A) -> std::result::Result<A::Output, A::Error>
    where
        A: BotAction,
    {
        let env = self.oracles.as_game_env();
        let mut ctx = ActionContext::new(&mut self.state, env, &mut self.narration);
        action.execute(&mut ctx)
    }

    /// Handles a command from a controller.
    pub fn dispatch(&mut self, command: BotCommand) -> Result<SummonReport> {
        match command {
            BotCommand::Summon { controller, bot } => {
                let action = SummonAction::new(controller, bot);
                tracing::debug!(%controller, %bot, action = action.name(), "dispatching");

                match self.run(&action) {
                    Ok(report) => {
                        log_attempts(&report.attempts);
                        tracing::info!(
                            %bot,
                            mechanism = %report.mechanism,
                            summoner = %report.placement.request.summoner,
                            joiner = %report.placement.request.joiner,
                            destination = %report.placement.destination(),
                            revived = report.placement.revived,
                            "summon succeeded"
                        );
                        Ok(report)
                    }
                    Err(error) => {
                        if let SummonError::Exhausted { attempts } = &error {
                            log_attempts(attempts);
                        }
                        log_failure(action.name(), &error);
                        Err(RuntimeError::Summon(error))
                    }
                }
            }
        }
    }

    /// Lets the bot react to something that happened in the world.
    pub fn handle_event(&mut self, event: WorldEvent) -> Result<Placement> {
        match event {
            WorldEvent::ObjectUsed {
                bot,
                controller,
                object,
            } => {
                let action = UseMeetingStoneAction::new(controller, bot, object);
                tracing::debug!(%bot, ?controller, %object, action = action.name(), "dispatching");

                match self.run(&action) {
                    Ok(placement) => {
                        tracing::info!(
                            %bot,
                            destination = %placement.destination(),
                            "joined summoning ritual"
                        );
                        Ok(placement)
                    }
                    Err(error) => {
                        log_failure(action.name(), &error);
                        Err(RuntimeError::RitualJoin(error))
                    }
                }
            }
        }
    }

    /// Lands every actor whose relocation is in flight.
    pub fn complete_transits(&mut self) -> usize {
        let landed = self.state.complete_transits();
        if landed > 0 {
            tracing::debug!(landed, "relocations completed");
        }
        landed
    }

    /// Moves the world clock forward.
    pub fn advance(&mut self, millis: u64) -> GameTime {
        self.state.clock = self.state.clock + millis;
        self.state.clock
    }
}

fn log_attempts(attempts: &[summon_core::Attempt]) {
    for attempt in attempts {
        tracing::debug!(
            mechanism = %attempt.mechanism,
            summoner = %attempt.request.summoner,
            joiner = %attempt.request.joiner,
            outcome = %attempt.outcome,
            code = attempt.failure.error_code(),
            "summon attempt failed"
        );
    }
}

fn log_failure<E: GameError>(action: &'static str, error: &E) {
    let severity = error.severity();
    if severity.is_internal() {
        tracing::warn!(action, code = error.error_code(), severity = severity.as_str(), %error, "action failed");
    } else {
        tracing::debug!(action, code = error.error_code(), severity = severity.as_str(), %error, "action refused");
    }
}

/// Builder for [`BotRuntime`].
pub struct RuntimeBuilder {
    config: SummonConfig,
    scenario: Option<Scenario>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: SummonConfig::default(),
            scenario: None,
        }
    }

    /// Override summoning configuration
    pub fn config(mut self, config: SummonConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the world to run against
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<BotRuntime> {
        let scenario = self.scenario.ok_or(RuntimeError::MissingScenario)?;
        let state = scenario.build_world()?;
        let oracles = OracleManager::from_scenario(&scenario, self.config);

        tracing::debug!(
            actors = scenario.actors.len(),
            objects = scenario.objects.len(),
            obstacles = scenario.obstacles.len(),
            "runtime built"
        );

        Ok(BotRuntime::new(state, oracles))
    }
}

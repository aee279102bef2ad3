//! Script replay.

use summon_content::ScriptStep;
use summon_core::{Channel, Notice};
use summon_runtime::{BotCommand, BotRuntime, WorldEvent};

/// What a single script step produced.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    pub step: ScriptStep,
    /// Short result line (`ok ...` or the failure's error code).
    pub summary: String,
    pub narration: Vec<(Channel, Notice)>,
}

impl StepOutcome {
    /// Lines as printed by the simulator.
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("{:?} -> {}", self.step, self.summary)];
        lines.extend(self.narration.iter().map(|(channel, notice)| {
            let tag = match channel {
                Channel::Master => "say",
                Channel::Error => "err",
            };
            format!("  [{tag}] {notice}")
        }));
        lines
    }
}

/// Replays script steps against a runtime.
pub struct Simulation {
    runtime: BotRuntime,
}

impl Simulation {
    pub fn new(runtime: BotRuntime) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &BotRuntime {
        &self.runtime
    }

    /// Runs one step. Action failures are part of the outcome, not errors.
    pub fn step(&mut self, step: ScriptStep) -> StepOutcome {
        let summary = match step {
            ScriptStep::Summon { controller, bot } => {
                match self.runtime.dispatch(BotCommand::Summon { controller, bot }) {
                    Ok(report) => format!(
                        "ok {} ({} brought {} to {})",
                        report.mechanism,
                        report.placement.request.summoner,
                        report.placement.request.joiner,
                        report.placement.destination()
                    ),
                    Err(error) => format!("failed {}", error.error_code()),
                }
            }
            ScriptStep::UseObject {
                bot,
                controller,
                object,
            } => match self.runtime.handle_event(WorldEvent::ObjectUsed {
                bot,
                controller,
                object,
            }) {
                Ok(placement) => format!("ok joined at {}", placement.destination()),
                Err(error) => format!("failed {}", error.error_code()),
            },
            ScriptStep::Advance { millis } => format!("clock {}", self.runtime.advance(millis)),
            ScriptStep::Arrive => format!("{} arrived", self.runtime.complete_transits()),
        };

        StepOutcome {
            step,
            summary,
            narration: self.runtime.drain_narration(),
        }
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = ScriptStep>) -> Vec<StepOutcome> {
        steps.into_iter().map(|step| self.step(step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summon_content::Scenario;
    use summon_core::{ActorState, EntityId, MapId, ObjectKind, Position, WorldObject};

    fn simulation() -> Simulation {
        let at = |x| Position::new(MapId(0), x, 0.0, 0.0);
        let scenario = Scenario {
            actors: vec![
                ActorState::new(EntityId(1), at(0.0), 100),
                ActorState::new(EntityId(2), at(20.0), 100),
            ],
            objects: vec![WorldObject::new(
                EntityId(70),
                ObjectKind::SummoningRitual,
                at(1.0),
            )],
            ..Scenario::default()
        };
        Simulation::new(BotRuntime::builder().scenario(scenario).build().unwrap())
    }

    #[test]
    fn failed_summon_is_rendered_with_narration() {
        let mut sim = simulation();

        let outcome = sim.step(ScriptStep::Summon {
            controller: EntityId(1),
            bot: EntityId(2),
        });

        assert_eq!(outcome.summary, "failed SUMMON_EXHAUSTED");
        let lines = outcome.render();
        assert!(lines.contains(&"  [err] There is no meeting stone near you".to_string()));
        assert!(lines.contains(&"  [err] There is no meeting stone nearby".to_string()));
    }

    #[test]
    fn ritual_then_arrival() {
        let mut sim = simulation();

        let outcomes = sim.run([
            ScriptStep::UseObject {
                bot: EntityId(2),
                controller: Some(EntityId(1)),
                object: EntityId(70),
            },
            ScriptStep::Arrive,
        ]);

        assert!(outcomes[0].summary.starts_with("ok joined at"));
        assert_eq!(outcomes[1].summary, "1 arrived");
        assert!(!sim.runtime().state().actor(EntityId(2)).unwrap().in_transit);
    }

    #[test]
    fn bundled_demo_replays() {
        use std::path::Path;
        use summon_content::{ScenarioLoader, ScriptLoader};

        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let scenario = ScenarioLoader::load(&data.join("inn.ron")).unwrap();
        let script = ScriptLoader::load(&data.join("summon.ron")).unwrap();
        let runtime = BotRuntime::builder().scenario(scenario).build().unwrap();

        let outcomes = Simulation::new(runtime).run(script);

        assert!(outcomes[0].summary.starts_with("ok innkeeper"));
        assert!(outcomes[0].narration.contains(&(Channel::Master, Notice::Revived)));
        assert!(outcomes[0].narration.contains(&(Channel::Master, Notice::Hello)));
        assert_eq!(outcomes[2].summary, "failed SUMMON_EXHAUSTED");
        assert!(outcomes[2].narration.contains(&(
            Channel::Error,
            Notice::RecallNotReady {
                joiner: summon_core::Party::Bot
            }
        )));
        assert!(outcomes[4].summary.starts_with("ok joined at"));
    }
}

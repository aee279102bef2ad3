//! Summoning simulator binary.
//!
//! Replays a RON script against a RON scenario and prints what the bot says.
//!
//! # Examples
//!
//! ```bash
//! SUMMON_SCENARIO=data/inn.ron SUMMON_SCRIPT=data/summon.ron \
//!     cargo run -p summon-client --bin summon-sim
//! ```

use anyhow::{Context, Result};
use summon_client::{ClientConfig, Simulation};
use summon_content::{ScenarioLoader, ScriptLoader};
use summon_runtime::BotRuntime;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = ClientConfig::from_env();
    let scenario_path = client
        .scenario_path
        .as_deref()
        .context("SUMMON_SCENARIO is not set")?;
    let script_path = client
        .script_path
        .as_deref()
        .context("SUMMON_SCRIPT is not set")?;

    let config = client.summon_config()?;
    let scenario = ScenarioLoader::load(scenario_path)
        .with_context(|| format!("loading scenario {}", scenario_path.display()))?;
    let script = ScriptLoader::load(script_path)
        .with_context(|| format!("loading script {}", script_path.display()))?;

    tracing::info!(
        scenario = %scenario_path.display(),
        steps = script.len(),
        revive_policy = %config.revive_policy,
        "starting simulation"
    );

    let runtime = BotRuntime::builder()
        .config(config)
        .scenario(scenario)
        .build()?;
    let mut simulation = Simulation::new(runtime);

    for outcome in simulation.run(script) {
        for line in outcome.render() {
            println!("{line}");
        }
    }

    tracing::info!("simulation complete");
    Ok(())
}

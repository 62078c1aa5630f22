//! Selects and runs exactly one agent operation per invocation.

use crate::{
    agent::AgentRegistry,
    config::{ExperimentConfig, RunMode},
};
use anyhow::Result;
use tracing::{info, instrument};

/// Run the experiment described by `config`.
///
/// The fullsearch path short-circuits before any agent is constructed;
/// otherwise the agent is built from the registry and exactly one of
/// `infer`, `test`, `train` runs to completion. Agent errors propagate
/// unmodified to the process boundary.
#[instrument(skip(config, registry), fields(agent_name = %config.agent_name, env = %config.env))]
pub async fn run(config: ExperimentConfig, registry: &AgentRegistry) -> Result<()> {
    if config.fullsearch {
        info!("Hyperparameter search not implemented yet");
        return Ok(());
    }

    let agent = registry.build(&config)?;

    match config.run_mode() {
        RunMode::Infer => {
            info!("Starting inference run");
            agent.infer().await
        }
        RunMode::Test => {
            info!("Starting test run over {} episodes", config.test_episodes);
            agent.test().await
        }
        RunMode::Train => {
            info!(
                "Starting training run, results in {}",
                config.result_dir.display()
            );
            agent.train().await
        }
    }
}

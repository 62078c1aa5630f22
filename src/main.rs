//! Main entry point for the RL experiment launcher CLI.

use anyhow::Result;
use clap::Parser;
use rl_launcher::{
    agent::AgentRegistry, cli, config::ExperimentConfig, dispatch, settings::Settings, telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::Cli::parse();

    // Load settings
    let settings = Settings::load()?;

    // Initialize logging
    telemetry::init(&settings.logging, args.debug)?;

    // Build the per-run experiment configuration
    let config = ExperimentConfig::from_cli(args, &settings)?;

    // Dispatch to the selected agent
    let registry = AgentRegistry::with_builtin_agents();
    dispatch::run(config, &registry).await
}

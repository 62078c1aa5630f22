//! The agent seam: the trait every learning algorithm implements, and the
//! registry mapping agent names to constructors.

use crate::{config::ExperimentConfig, error::LaunchError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A learning algorithm pluggable into the launcher. Each run invokes
/// exactly one of the three operations.
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;
    async fn train(&self) -> Result<()>;
    async fn test(&self) -> Result<()>;
    async fn infer(&self) -> Result<()>;
}

impl std::fmt::Debug for dyn Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("name", &self.name()).finish()
    }
}

type AgentBuilder = Box<dyn Fn(&ExperimentConfig) -> Result<Box<dyn Agent>> + Send + Sync>;

/// Explicit mapping from agent name to constructor, populated at startup.
/// Unknown names are rejected with a typed error instead of a dynamic lookup.
#[derive(Default)]
pub struct AgentRegistry {
    builders: HashMap<String, AgentBuilder>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in agents shipped by this
    /// crate. Downstream crates add their algorithms on top.
    pub fn with_builtin_agents() -> Self {
        let mut registry = Self::new();
        registry.register("trace", |config| {
            Ok(Box::new(TraceAgent::new(config.clone())) as Box<dyn Agent>)
        });
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: Fn(&ExperimentConfig) -> Result<Box<dyn Agent>> + Send + Sync + 'static,
    {
        let name = name.into();
        info!("Registering agent builder: {}", name);
        self.builders.insert(name, Box::new(builder));
    }

    /// Construct the agent named by `config.agent_name`, handing it the full
    /// configuration.
    pub fn build(&self, config: &ExperimentConfig) -> Result<Box<dyn Agent>> {
        let builder =
            self.builders
                .get(&config.agent_name)
                .ok_or_else(|| LaunchError::UnknownAgent {
                    name: config.agent_name.clone(),
                    registered: self.agent_names(),
                })?;
        builder(config)
    }

    pub fn agent_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.builders.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Built-in agent that only logs what it was asked to do and records the
/// resolved configuration under the run's result directory. Useful for
/// checking launcher wiring without a real algorithm.
pub struct TraceAgent {
    config: ExperimentConfig,
}

impl TraceAgent {
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    async fn write_manifest(&self, dir: &Path) -> Result<()> {
        if self.config.dry_run {
            info!("Dry run, skipping manifest write to {}", dir.display());
            return Ok(());
        }

        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating result directory {}", dir.display()))?;

        let manifest = serde_json::to_string_pretty(&self.config)?;
        let path = dir.join("run_config.json");
        tokio::fs::write(&path, manifest)
            .await
            .with_context(|| format!("writing run manifest {}", path.display()))?;

        info!("Run manifest written to {}", path.display());
        Ok(())
    }
}

#[async_trait]
impl Agent for TraceAgent {
    fn name(&self) -> &str {
        "trace"
    }

    async fn train(&self) -> Result<()> {
        info!(
            env = %self.config.env,
            learning_rate = self.config.learning_rate,
            gamma = self.config.gamma,
            batch_size = self.config.batch_size,
            max_train_episodes = self.config.max_train_episodes,
            seed = self.config.random_seed,
            "Trace agent: train"
        );
        self.write_manifest(&self.config.result_dir).await
    }

    async fn test(&self) -> Result<()> {
        info!(
            env = %self.config.env,
            test_episodes = self.config.test_episodes,
            render_test_every = self.config.render_test_every,
            "Trace agent: test"
        );
        self.write_manifest(&self.config.test_result_dir).await
    }

    async fn infer(&self) -> Result<()> {
        info!(env = %self.config.env, "Trace agent: infer");
        Ok(())
    }
}

//! Per-run experiment configuration with typed fields and validation.
//!
//! Built exactly once per invocation from the parsed CLI plus ambient
//! settings, then consumed by the dispatcher. The run timestamp is captured
//! here, at construction time, so both derived result directories share it.

use crate::{cli::Cli, error::LaunchError, settings::Settings};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Which of the three mutually exclusive agent operations a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Infer,
    Test,
    Train,
}

/// Immutable record of everything an agent needs for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    // Hyperparameter search plumbing
    pub fullsearch: bool,
    pub dry_run: bool,
    pub nb_process: usize,
    /// Parameters pinned to fixed values during an automated search.
    pub fixed_params: HashMap<String, Value>,

    // Agent configuration
    pub agent_name: String,
    pub best: bool,
    pub learning_rate: f64,
    pub drop_keep_prob: f64,
    pub l2: f64,
    pub batch_size: usize,
    pub replay_buffer_size: usize,
    pub gamma: f64,
    pub epsilon: f64,

    // Environment
    pub env: String,

    // Training and testing cadence
    pub debug: bool,
    pub max_iter: u64,
    pub max_train_episodes: u64,
    pub infer: bool,
    pub test: bool,
    pub test_episodes: u64,
    pub test_every: u64,
    pub render_test_every: u64,

    // Run metadata
    pub result_dir: PathBuf,
    pub test_result_dir: PathBuf,
    pub random_seed: u64,
}

impl ExperimentConfig {
    /// Copy every flag into a typed record, decoding `fixed_params` from its
    /// JSON string and deriving the result directories that were not given
    /// explicitly.
    pub fn from_cli(cli: Cli, settings: &Settings) -> Result<Self, LaunchError> {
        let fixed_params = decode_fixed_params(&cli.fixed_params)?;

        let random_seed = match cli.random_seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen_range(0..256),
        };

        // One capture shared by both paths so test_result_dir is always
        // result_dir + "/test".
        let timestamp = Utc::now().timestamp();
        let result_dir = cli.result_dir.unwrap_or_else(|| {
            derive_result_dir(&settings.project_dir, &cli.agent_name, &cli.env, timestamp)
        });
        let test_result_dir = cli
            .test_result_dir
            .unwrap_or_else(|| result_dir.join("test"));

        Ok(Self {
            fullsearch: cli.fullsearch,
            dry_run: cli.dry_run,
            nb_process: cli.nb_process,
            fixed_params,
            agent_name: cli.agent_name,
            best: cli.best,
            learning_rate: cli.learning_rate,
            drop_keep_prob: cli.drop_keep_prob,
            l2: cli.l2,
            batch_size: cli.batch_size,
            replay_buffer_size: cli.replay_buffer_size,
            gamma: cli.gamma,
            epsilon: cli.epsilon,
            env: cli.env,
            debug: cli.debug,
            max_iter: cli.max_iter,
            max_train_episodes: cli.max_train_episodes,
            infer: cli.infer,
            test: cli.test,
            test_episodes: cli.test_episodes,
            test_every: cli.test_every,
            render_test_every: cli.render_test_every,
            result_dir,
            test_result_dir,
            random_seed,
        })
    }

    /// Mode precedence: `infer` beats `test` beats the training default.
    /// Conflicting flags are not an error; `infer` silently wins.
    pub fn run_mode(&self) -> RunMode {
        if self.infer {
            RunMode::Infer
        } else if self.test {
            RunMode::Test
        } else {
            RunMode::Train
        }
    }
}

fn decode_fixed_params(raw: &str) -> Result<HashMap<String, Value>, LaunchError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| LaunchError::Config(format!("not valid JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(LaunchError::Config(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// `<project_dir>/results/<agent_name>/<env>/<unix_ts>` so every run lands
/// in its own folder (important for TensorBoard-style consumers).
fn derive_result_dir(project_dir: &Path, agent_name: &str, env: &str, timestamp: i64) -> PathBuf {
    project_dir
        .join("results")
        .join(agent_name)
        .join(env)
        .join(timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    fn parse(extra: &[&str]) -> Cli {
        let mut args = vec!["rl-launch"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    fn build(extra: &[&str]) -> Result<ExperimentConfig, LaunchError> {
        ExperimentConfig::from_cli(parse(extra), &Settings::default())
    }

    #[test]
    fn fixed_params_decodes_to_the_parsed_object() {
        let config = build(&["--fixed_params", r#"{"learning_rate": 0.001, "gamma": 0.9}"#])
            .unwrap();
        assert_eq!(config.fixed_params.len(), 2);
        assert_eq!(config.fixed_params["learning_rate"], json!(0.001));
        assert_eq!(config.fixed_params["gamma"], json!(0.9));
    }

    #[test]
    fn fixed_params_defaults_to_an_empty_mapping() {
        let config = build(&[]).unwrap();
        assert!(config.fixed_params.is_empty());
    }

    #[test]
    fn malformed_fixed_params_is_a_config_error() {
        let err = build(&["--fixed_params", "not json"]).unwrap_err();
        assert!(matches!(err, LaunchError::Config(_)));
    }

    #[test]
    fn non_object_fixed_params_is_a_config_error() {
        let err = build(&["--fixed_params", "[1, 2, 3]"]).unwrap_err();
        assert!(matches!(err, LaunchError::Config(_)));
    }

    #[test]
    fn default_seed_is_drawn_below_256() {
        for _ in 0..32 {
            let config = build(&[]).unwrap();
            assert!(config.random_seed < 256);
        }
    }

    #[test]
    fn explicit_seed_is_kept_verbatim() {
        let config = build(&["--random_seed", "42000"]).unwrap();
        assert_eq!(config.random_seed, 42000);
    }

    #[test]
    fn result_dir_contains_agent_and_env_segments() {
        let config = build(&["--agent_name", "dqn", "--env", "MountainCar-v0"]).unwrap();
        let segments: Vec<_> = config
            .result_dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        assert!(segments.contains(&"dqn".to_string()));
        assert!(segments.contains(&"MountainCar-v0".to_string()));
        assert!(segments.contains(&"results".to_string()));
    }

    #[test]
    fn test_result_dir_is_result_dir_plus_test() {
        let config = build(&[]).unwrap();
        assert_eq!(config.test_result_dir, config.result_dir.join("test"));
    }

    #[test]
    fn explicit_result_dirs_override_derivation() {
        let config = build(&[
            "--result_dir",
            "/tmp/run-a",
            "--test_result_dir",
            "/tmp/run-a-eval",
        ])
        .unwrap();
        assert_eq!(config.result_dir, PathBuf::from("/tmp/run-a"));
        assert_eq!(config.test_result_dir, PathBuf::from("/tmp/run-a-eval"));
    }

    #[test]
    fn infer_wins_over_test() {
        let config = build(&["--infer", "--test"]).unwrap();
        assert_eq!(config.run_mode(), RunMode::Infer);
    }

    #[test]
    fn test_flag_selects_test_mode() {
        let config = build(&["--test"]).unwrap();
        assert_eq!(config.run_mode(), RunMode::Test);
    }

    #[test]
    fn training_is_the_default_mode() {
        let config = build(&[]).unwrap();
        assert_eq!(config.run_mode(), RunMode::Train);
    }
}

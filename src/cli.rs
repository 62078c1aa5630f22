//! Command-line interface definitions using clap derive API.
//!
//! Flat single-level flag surface: every experiment option is a long flag
//! with a documented default, copied verbatim into [`crate::config::ExperimentConfig`].

use clap::Parser;
use std::path::PathBuf;

/// RL experiment launcher CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "rl-launch")]
#[command(about = "Launch reinforcement-learning experiments")]
#[command(version)]
pub struct Cli {
    // Hyperparameter search configuration
    /// Perform a full search of the hyperparameter space
    #[arg(long, default_value_t = false)]
    pub fullsearch: bool,

    /// Perform a dry run (testing purpose)
    #[arg(long = "dry_run", default_value_t = false)]
    pub dry_run: bool,

    /// Number of parallel processes for a hyperparameter search
    #[arg(long = "nb_process", default_value_t = 4)]
    pub nb_process: usize,

    /// JSON object pinning parameters during a search, ex: '{"learning_rate": 0.001}'
    #[arg(long = "fixed_params", default_value = "{}")]
    pub fixed_params: String,

    // Agent configuration
    /// Unique name of the agent
    #[arg(long = "agent_name", default_value = "ReinforceModelBlackBoxReader")]
    pub agent_name: String,

    /// Force the best known configuration
    #[arg(long, default_value_t = false)]
    pub best: bool,

    /// The learning rate of SGD
    #[arg(long = "learning_rate", default_value_t = 1e-3)]
    pub learning_rate: f64,

    /// The dropout keep probability
    #[arg(long = "drop_keep_prob", default_value_t = 1.0)]
    pub drop_keep_prob: f64,

    /// L2 regularisation strength
    #[arg(long, default_value_t = 0.0)]
    pub l2: f64,

    /// Batch size
    #[arg(long = "batch_size", default_value_t = 64)]
    pub batch_size: usize,

    /// Number of timesteps to store in the replay buffer
    #[arg(long = "replay_buffer_size", default_value_t = 1_000_000)]
    pub replay_buffer_size: usize,

    /// Discount parameter for TD learning
    #[arg(long, default_value_t = 0.1)]
    pub gamma: f64,

    /// Exploration parameter for epsilon-greedy exploration
    #[arg(long, default_value_t = 0.01)]
    pub epsilon: f64,

    // Environment configuration
    /// Name of the gym environment to use
    #[arg(long, default_value = "CartPole-v0")]
    pub env: String,

    // Training configuration
    /// Enable debug-level logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Max number of training iterations
    #[arg(long = "max_iter", default_value_t = 1_000_000)]
    pub max_iter: u64,

    /// Max number of training episodes
    #[arg(long = "max_train_episodes", default_value_t = 1000)]
    pub max_train_episodes: u64,

    /// Run inference with a trained model
    #[arg(long, default_value_t = false)]
    pub infer: bool,

    /// Load a model and compute test performance
    #[arg(long, default_value_t = false)]
    pub test: bool,

    /// Number of episodes over which to compute test results
    #[arg(long = "test_episodes", default_value_t = 100)]
    pub test_episodes: u64,

    /// Episode interval at which to test the agent during training
    #[arg(long = "test_every", default_value_t = 10)]
    pub test_every: u64,

    /// Episode interval at which to render the environment during testing
    #[arg(long = "render_test_every", default_value_t = 10)]
    pub render_test_every: u64,

    /// Directory to store/log the model (derived from agent, env and time when omitted)
    #[arg(long = "result_dir")]
    pub result_dir: Option<PathBuf>,

    /// Directory to store/log the model test results (derived when omitted)
    #[arg(long = "test_result_dir")]
    pub test_result_dir: Option<PathBuf>,

    /// Value of random seed (drawn uniformly in [0, 256) when omitted)
    #[arg(long = "random_seed")]
    pub random_seed: Option<u64>,
}

//! RL Experiment Launcher - Core Library
//!
//! Parses experiment hyperparameters from flags, derives a unique output
//! directory per run, and dispatches to a pluggable agent for training,
//! testing, or inference. The learning algorithms themselves live in
//! downstream crates and plug in through [`agent::AgentRegistry`].

pub mod agent;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod settings;
pub mod telemetry;

pub use agent::{Agent, AgentRegistry};
pub use config::{ExperimentConfig, RunMode};
pub use error::LaunchError;

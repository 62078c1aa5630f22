//! Typed failures surfaced by the launcher itself. Agent run failures
//! propagate unmodified as `anyhow::Error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid fixed_params: {0}")]
    Config(String),
    #[error("unknown agent '{name}' (registered: {registered:?})")]
    UnknownAgent {
        name: String,
        registered: Vec<String>,
    },
}

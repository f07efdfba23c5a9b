//! Errors for the loading surfaces (tuning files, leaderboard)
//!
//! The simulation itself never fails; only I/O and parsing at the edges do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum HighScoreError {
    #[error("failed to access high score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt high score file: {0}")]
    Parse(#[from] serde_json::Error),
}

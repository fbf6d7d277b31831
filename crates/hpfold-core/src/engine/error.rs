use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::chain::ChainError;
use crate::core::models::walk::WalkError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Invalid chain: {source}")]
    Chain {
        #[from]
        source: ChainError,
    },

    #[error("Invalid walk: {source}")]
    Walk {
        #[from]
        source: WalkError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    /// The random constructor ran out of free neighbors after placing
    /// `placed` residues. Recoverable: the restart driver simply tries again.
    #[error("Dead end after placing {placed} residues: no free neighbor left")]
    DeadEnd { placed: usize },

    /// The lookahead planner found no feasible continuation after committing
    /// `committed` moves. Recoverable by retrying with a different horizon.
    #[error("Infeasible plan after {committed} committed moves: no window continuation fits")]
    Infeasible { committed: usize },

    /// Every candidate failed validity (exhaustive) or every attempt
    /// dead-ended (random restart). Distinct from a valid fold scoring zero.
    #[error("No valid fold found")]
    NoValidFold,
}

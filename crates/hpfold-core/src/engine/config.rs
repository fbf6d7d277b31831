use crate::core::scoring::BondWeights;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Unsupported option: {0}")]
    UnsupportedOption(&'static str),

    #[error("Random restart requires at least 1 attempt")]
    ZeroAttempts,

    #[error("Lookahead horizon must be at least 2, got {0}")]
    HorizonTooSmall(usize),
}

/// Parameters shared by all search strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Bond-weight table used for every score in the run.
    pub weights: BondWeights,
    /// Base seed for the random constructor; attempt `k` derives its own RNG
    /// stream from `seed + k`, so runs are reproducible and restarts can be
    /// evaluated independently.
    pub seed: u64,
    /// Bias random construction toward cells adjacent to already-placed
    /// hydrophobic or cysteine residues (the "greedy" variant).
    pub preference_bias: bool,
    /// Optional wall-clock budget. The exhaustive search and the lookahead
    /// planner abort candidate generation when it expires and return the
    /// best result found so far.
    pub deadline: Option<Duration>,
    /// Extension point. Dead ends in the random constructor and the
    /// lookahead planner are terminal; backtracking is not implemented and
    /// the builder rejects `true`.
    pub allow_backtrack: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: BondWeights::standard(),
            seed: 0,
            preference_bias: false,
            deadline: None,
            allow_backtrack: false,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    weights: Option<BondWeights>,
    seed: Option<u64>,
    preference_bias: Option<bool>,
    deadline: Option<Duration>,
    allow_backtrack: Option<bool>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(mut self, weights: BondWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn preference_bias(mut self, bias: bool) -> Self {
        self.preference_bias = Some(bias);
        self
    }

    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn allow_backtrack(mut self, allow: bool) -> Self {
        self.allow_backtrack = Some(allow);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        if self.allow_backtrack == Some(true) {
            return Err(ConfigError::UnsupportedOption("allow_backtrack"));
        }
        let defaults = SearchConfig::default();
        Ok(SearchConfig {
            weights: self.weights.unwrap_or(defaults.weights),
            seed: self.seed.unwrap_or(defaults.seed),
            preference_bias: self.preference_bias.unwrap_or(defaults.preference_bias),
            deadline: self.deadline,
            allow_backtrack: false,
        })
    }
}

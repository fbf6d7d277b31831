use crate::core::models::chain::Chain;
use crate::core::models::moves::Move;
use crate::core::models::walk::{Coord, Walk};
use crate::core::scoring::{ContactReport, Scorer};
use crate::engine::config::{ConfigError, SearchConfig};
use crate::engine::error::EngineError;
use crate::engine::exhaustive::ExhaustiveSearch;
use crate::engine::lookahead::LookaheadPlanner;
use crate::engine::random::RestartSearch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{info, instrument};

/// Which search strategy drives the fold construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Enumerate all `4^(n-1)` move sequences.
    Exhaustive,
    /// Randomized construction with up to `attempts` restarts.
    RandomRestart { attempts: usize },
    /// Bounded-horizon incremental planning.
    Lookahead { horizon: usize },
}

/// The best fold found by a strategy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub moves: Vec<Move>,
    pub coords: Vec<Coord>,
    pub score: f64,
    /// Contributing contacts as `(i, j)` residue-index pairs, `i < j`.
    pub contacts: Vec<(usize, usize)>,
    /// Residue indices participating in at least one scoring contact.
    pub bonds: BTreeSet<usize>,
}

impl SearchResult {
    fn from_parts(walk: Walk, report: ContactReport) -> Self {
        let bonds = report.bonded_residues();
        Self {
            moves: walk.moves().to_vec(),
            coords: walk.coords().to_vec(),
            score: report.score,
            contacts: report.pairs,
            bonds,
        }
    }

    /// The move string in U/D/L/R letters.
    pub fn route(&self) -> String {
        self.moves.iter().map(|m| m.symbol()).collect()
    }
}

/// Runs one search strategy over `chain` and returns the best fold found.
///
/// Failures are recoverable signals, not panics: `DeadEnd`/`Infeasible`/
/// `NoValidFold` tell the caller that no valid fold was produced, which is
/// distinct from a valid fold scoring zero.
#[instrument(skip(chain, config), fields(chain_len = chain.len()))]
pub fn run(
    chain: &Chain,
    strategy: Strategy,
    config: &SearchConfig,
) -> Result<SearchResult, EngineError> {
    validate(strategy)?;

    let scorer = Scorer::new(config.weights);
    let deadline = config.deadline.map(|budget| Instant::now() + budget);

    info!(?strategy, "Dispatching search.");
    let (walk, report) = match strategy {
        Strategy::Exhaustive => ExhaustiveSearch::new(chain, &scorer, deadline).run()?,
        Strategy::RandomRestart { attempts } => RestartSearch::new(
            chain,
            &scorer,
            config.preference_bias,
            attempts,
            config.seed,
        )
        .run()?,
        Strategy::Lookahead { horizon } => {
            LookaheadPlanner::new(chain, &scorer, horizon, deadline).run()?
        }
    };

    info!(score = report.score, route = %walk.route(), "Search finished.");
    Ok(SearchResult::from_parts(walk, report))
}

fn validate(strategy: Strategy) -> Result<(), ConfigError> {
    match strategy {
        Strategy::RandomRestart { attempts: 0 } => Err(ConfigError::ZeroAttempts),
        Strategy::Lookahead { horizon } if horizon < 2 => {
            Err(ConfigError::HorizonTooSmall(horizon))
        }
        _ => Ok(()),
    }
}

use super::error::EngineError;
use crate::core::lattice::Lattice;
use crate::core::models::chain::Chain;
use crate::core::models::walk::{Coord, Walk};
use crate::core::scoring::{ContactReport, Scorer};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds one self-avoiding walk by repeated randomized local choice.
///
/// No backtracking: running out of free neighbors mid-build is a `DeadEnd`,
/// and the caller retries with a fresh lattice. With `preference_bias` the
/// constructor looks one cell ahead and, when possible, steps onto a cell
/// that already touches a placed hydrophobic or cysteine residue; that flag
/// is the only difference between the "random" and "greedy" variants.
#[derive(Debug, Clone, Copy)]
pub struct RandomConstructor {
    preference_bias: bool,
}

impl RandomConstructor {
    pub fn new(preference_bias: bool) -> Self {
        Self { preference_bias }
    }

    /// Places the whole chain, one residue per step, choosing uniformly
    /// among the candidate directions at each step.
    pub fn construct(&self, chain: &Chain, rng: &mut impl Rng) -> Result<Walk, EngineError> {
        let mut lattice = Lattice::new();
        let mut tip = Coord::ORIGIN;
        let mut moves = Vec::with_capacity(chain.len() - 1);
        lattice.occupy(tip, 0);

        for placed in 1..chain.len() {
            let free = lattice.free_directions(tip);
            if free.is_empty() {
                return Err(EngineError::DeadEnd { placed });
            }

            let preferred: Vec<_> = if self.preference_bias {
                free.iter()
                    .copied()
                    .filter(|&m| lattice.has_bonding_neighbor(tip.translate(m), chain.residues()))
                    .collect()
            } else {
                Vec::new()
            };

            let pool = if preferred.is_empty() {
                &free
            } else {
                &preferred
            };
            let m = *pool.choose(rng).expect("candidate pool is non-empty");

            tip = tip.translate(m);
            lattice.occupy(tip, placed);
            moves.push(m);
        }

        Ok(Walk::from_moves(chain, &moves)?)
    }
}

/// Multi-restart driver around [`RandomConstructor`].
///
/// Attempt `k` draws from its own RNG stream seeded with `seed + k`, so a
/// run is reproducible regardless of how attempts are scheduled. Ties are
/// broken first-seen-wins (strict `>` comparison) — deliberately the
/// opposite of the exhaustive enumerator's policy.
#[derive(Debug)]
pub struct RestartSearch<'a> {
    chain: &'a Chain,
    scorer: &'a Scorer,
    constructor: RandomConstructor,
    attempts: usize,
    seed: u64,
}

impl<'a> RestartSearch<'a> {
    pub fn new(
        chain: &'a Chain,
        scorer: &'a Scorer,
        preference_bias: bool,
        attempts: usize,
        seed: u64,
    ) -> Self {
        Self {
            chain,
            scorer,
            constructor: RandomConstructor::new(preference_bias),
            attempts,
            seed,
        }
    }

    /// Runs up to `attempts` constructions, discards dead ends, and keeps
    /// the first maximal-scoring walk. `NoValidFold` if every attempt
    /// dead-ended.
    #[instrument(skip_all, name = "restart_search", fields(attempts = self.attempts))]
    pub fn run(&self) -> Result<(Walk, ContactReport), EngineError> {
        info!(
            chain_len = self.chain.len(),
            bias = self.constructor.preference_bias,
            "Starting randomized multi-restart construction."
        );

        let outcomes = self.construct_all();

        let mut best: Option<(Walk, ContactReport)> = None;
        let mut dead_ends = 0usize;
        for walk in outcomes {
            let Some(walk) = walk else {
                dead_ends += 1;
                continue;
            };
            let report = self.scorer.score(self.chain, &walk);
            let improves = best
                .as_ref()
                .is_none_or(|(_, incumbent)| report.score > incumbent.score);
            if improves {
                best = Some((walk, report));
            }
        }

        debug!(dead_ends, "Restart attempts finished.");
        best.ok_or(EngineError::NoValidFold)
    }

    fn attempt(&self, k: usize) -> Option<Walk> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(k as u64));
        self.constructor.construct(self.chain, &mut rng).ok()
    }

    #[cfg(not(feature = "parallel"))]
    fn construct_all(&self) -> Vec<Option<Walk>> {
        (0..self.attempts).map(|k| self.attempt(k)).collect()
    }

    #[cfg(feature = "parallel")]
    fn construct_all(&self) -> Vec<Option<Walk>> {
        // Collected in attempt order so the first-seen-wins tie policy is
        // unaffected by worker scheduling.
        (0..self.attempts)
            .into_par_iter()
            .map(|k| self.attempt(k))
            .collect()
    }
}

use super::enumerate::MoveSequences;
use super::error::EngineError;
use crate::core::lattice::Lattice;
use crate::core::models::chain::Chain;
use crate::core::models::moves::Move;
use crate::core::models::walk::{Coord, Walk};
use crate::core::scoring::{ContactReport, Scorer};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Bounded-horizon incremental search: a sliding-window beam search with
/// beam width "all candidates in the window" and commitment depth 1.
///
/// At each step the planner enumerates every continuation of up to
/// `horizon` residues from the committed tip, scores the feasible ones over
/// the whole tentative placement (the committed-prefix term is constant
/// within a window, so ranking matches window-local scoring while contacts
/// against the prefix stay visible), and commits only the first move of the
/// best. Committed moves are never revisited; if a window has no feasible
/// continuation the plan fails with `Infeasible`.
#[derive(Debug)]
pub struct LookaheadPlanner<'a> {
    chain: &'a Chain,
    scorer: &'a Scorer,
    horizon: usize,
    deadline: Option<Instant>,
}

impl<'a> LookaheadPlanner<'a> {
    pub fn new(
        chain: &'a Chain,
        scorer: &'a Scorer,
        horizon: usize,
        deadline: Option<Instant>,
    ) -> Self {
        Self {
            chain,
            scorer,
            horizon,
            deadline,
        }
    }

    /// Plans the full walk and returns it with its final score, recomputed
    /// over the completed placement (window-local scores are not additive
    /// across overlapping windows).
    #[instrument(skip_all, name = "lookahead_plan", fields(chain_len = self.chain.len(), horizon = self.horizon))]
    pub fn run(&self) -> Result<(Walk, ContactReport), EngineError> {
        let n = self.chain.len();
        debug_assert!(self.horizon >= 2, "horizon must be validated upstream");
        info!("Starting lookahead planning.");

        let mut lattice = Lattice::new();
        let mut coords = vec![Coord::ORIGIN];
        let mut moves: Vec<Move> = Vec::with_capacity(n - 1);
        lattice.occupy(Coord::ORIGIN, 0);

        for step in 0..n - 1 {
            let window_end = (step + self.horizon).min(n);
            let first_move = self
                .best_window_move(&lattice, &coords, step, window_end)
                .ok_or(EngineError::Infeasible {
                    committed: moves.len(),
                })?;

            let tip = coords[step].translate(first_move);
            lattice.occupy(tip, step + 1);
            coords.push(tip);
            moves.push(first_move);
        }

        let walk = Walk::from_moves(self.chain, &moves)?;
        let report = self.scorer.score(self.chain, &walk);
        debug!(score = report.score, route = %walk.route(), "Plan complete.");
        Ok((walk, report))
    }

    /// Exhausts the window's move sequences and returns the first move of
    /// the best feasible continuation (ties: first found, canonical order).
    fn best_window_move(
        &self,
        lattice: &Lattice,
        committed: &[Coord],
        step: usize,
        window_end: usize,
    ) -> Option<Move> {
        let target_len = window_end - step - 1;
        let kinds = &self.chain.residues()[..window_end];
        let tip = committed[committed.len() - 1];

        let mut best: Option<(f64, Move)> = None;

        for candidate in MoveSequences::new(target_len) {
            // Once the deadline expires, settle for the best feasible
            // continuation found so far instead of failing the plan; the
            // search degrades to first-feasible rather than erroring.
            if best.is_some() && self.expired() {
                break;
            }

            let Some(extension) = self.extend(lattice, tip, &candidate) else {
                continue;
            };

            let mut placed = committed.to_vec();
            placed.extend(extension);
            let report = self.scorer.score_placed(kinds, &placed);

            let improves = best.is_none_or(|(score, _)| report.score > score);
            if improves {
                best = Some((report.score, candidate[0]));
            }
        }

        best.map(|(_, m)| m)
    }

    /// Applies `candidate` from `tip`, rejecting collisions with the
    /// committed placement or within the extension itself.
    fn extend(&self, lattice: &Lattice, tip: Coord, candidate: &[Move]) -> Option<Vec<Coord>> {
        let mut extension = Vec::with_capacity(candidate.len());
        let mut cursor = tip;
        for &m in candidate {
            cursor = cursor.translate(m);
            if !lattice.is_free(cursor) || extension.contains(&cursor) {
                return None;
            }
            extension.push(cursor);
        }
        Some(extension)
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

use super::enumerate::MoveSequences;
use super::error::EngineError;
use crate::core::models::chain::Chain;
use crate::core::models::moves::Move;
use crate::core::models::walk::Walk;
use crate::core::scoring::{ContactReport, Scorer};
use std::time::Instant;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::Mutex;

/// Exhaustive search over all `4^(n-1)` move sequences of a chain.
///
/// Ties are broken last-seen-wins (`>=` comparison against the running
/// best); the randomized and lookahead strategies intentionally use the
/// opposite policy.
#[derive(Debug)]
pub struct ExhaustiveSearch<'a> {
    chain: &'a Chain,
    scorer: &'a Scorer,
    deadline: Option<Instant>,
}

/// A scored candidate with its position in enumeration order. The index
/// participates in tie-breaking so that the parallel reduction reports the
/// same fold as the sequential scan.
struct Candidate {
    index: u64,
    walk: Walk,
    report: ContactReport,
}

impl Candidate {
    fn beats(&self, incumbent: Option<&Candidate>) -> bool {
        match incumbent {
            None => true,
            Some(best) => {
                self.report.score > best.report.score
                    || (self.report.score == best.report.score && self.index >= best.index)
            }
        }
    }
}

impl<'a> ExhaustiveSearch<'a> {
    pub fn new(chain: &'a Chain, scorer: &'a Scorer, deadline: Option<Instant>) -> Self {
        Self {
            chain,
            scorer,
            deadline,
        }
    }

    /// Runs the full enumeration and returns the best-scoring valid walk.
    ///
    /// Self-intersecting candidates are discarded. When the deadline expires
    /// mid-run, the best walk seen so far is returned instead of an error;
    /// `NoValidFold` is reported only when no candidate survived validation.
    #[instrument(skip_all, name = "exhaustive_search", fields(chain_len = self.chain.len()))]
    pub fn run(&self) -> Result<(Walk, ContactReport), EngineError> {
        let target_len = self.chain.len() - 1;
        info!(
            candidates = MoveSequences::total(target_len),
            "Starting exhaustive enumeration."
        );

        let best = self.scan(target_len);

        match best {
            Some(candidate) => {
                debug!(
                    score = candidate.report.score,
                    route = %candidate.walk.route(),
                    "Exhaustive search finished."
                );
                Ok((candidate.walk, candidate.report))
            }
            None => Err(EngineError::NoValidFold),
        }
    }

    fn evaluate(&self, index: u64, moves: &[Move]) -> Option<Candidate> {
        let walk = Walk::from_moves(self.chain, moves).ok()?;
        let report = self.scorer.score(self.chain, &walk);
        Some(Candidate {
            index,
            walk,
            report,
        })
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&self, target_len: usize) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;
        for (index, moves) in MoveSequences::new(target_len).enumerate() {
            if self.expired() {
                debug!("Deadline expired; returning best candidate so far.");
                break;
            }
            if let Some(candidate) = self.evaluate(index as u64, &moves) {
                if candidate.beats(best.as_ref()) {
                    best = Some(candidate);
                }
            }
        }
        best
    }

    #[cfg(feature = "parallel")]
    fn scan(&self, target_len: usize) -> Option<Candidate> {
        let best = Mutex::new(None::<Candidate>);

        MoveSequences::new(target_len)
            .enumerate()
            .par_bridge()
            .for_each(|(index, moves)| {
                if self.expired() {
                    return;
                }
                if let Some(candidate) = self.evaluate(index as u64, &moves) {
                    let mut guard = best.lock().expect("best-candidate lock poisoned");
                    // Score comparison and capture happen under one lock so
                    // the reported walk always matches the reported score.
                    if candidate.beats(guard.as_ref()) {
                        *guard = Some(candidate);
                    }
                }
            });

        best.into_inner().expect("best-candidate lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::BondWeights;
    use std::time::Duration;

    fn search(sequence: &str) -> (Walk, ContactReport) {
        let chain: Chain = sequence.parse().unwrap();
        let scorer = Scorer::new(BondWeights::standard());
        ExhaustiveSearch::new(&chain, &scorer, None).run().unwrap()
    }

    #[test]
    fn three_residue_chains_cannot_score() {
        let (walk, report) = search("HHH");
        assert_eq!(report.score, 0.0);
        assert_eq!(walk.len(), 3);
    }

    #[test]
    fn hpph_optimum_closes_the_ends() {
        let (walk, report) = search("HPPH");
        assert_eq!(report.score, 0.5);
        assert_eq!(report.pairs, vec![(0, 3)]);
        assert!(walk.coords()[0].is_adjacent(walk.coords()[3]));
    }

    #[test]
    fn ties_go_to_the_last_candidate_seen() {
        // Every valid walk of "PPP" scores zero; last-seen-wins must report
        // the final valid sequence in canonical enumeration order, which is
        // L followed by L (indices run U,R,D,L per position).
        let (walk, report) = search("PPP");
        assert_eq!(report.score, 0.0);
        assert_eq!(walk.moves(), &[Move::Left, Move::Left]);
    }

    #[test]
    fn exhaustive_search_is_deterministic() {
        let first = search("HCPCH");
        let second = search("HCPCH");
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }

    #[test]
    fn expired_deadline_still_reports_a_fold_if_one_was_seen() {
        let chain: Chain = "HPPH".parse().unwrap();
        let scorer = Scorer::new(BondWeights::standard());
        // A deadline in the past: sequential scan stops before the first
        // candidate, parallel workers skip evaluation. Either way the run
        // must degrade to NoValidFold, never panic.
        let deadline = Instant::now() - Duration::from_secs(1);
        let result = ExhaustiveSearch::new(&chain, &scorer, Some(deadline)).run();
        assert_eq!(result.unwrap_err(), EngineError::NoValidFold);
    }
}

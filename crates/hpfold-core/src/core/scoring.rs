use super::lattice::Lattice;
use super::models::chain::Chain;
use super::models::residue::ResidueKind;
use super::models::walk::{Coord, Walk};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Contact-energy weights by residue-kind pair, exposed as data so that
/// alternative weightings are configurations rather than code paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondWeights {
    pub hydrophobic_hydrophobic: f64,
    pub hydrophobic_cysteine: f64,
    pub cysteine_cysteine: f64,
}

impl BondWeights {
    /// The full weighting: H-H 0.5, H-C 1.0, C-C 2.5.
    pub fn standard() -> Self {
        Self {
            hydrophobic_hydrophobic: 0.5,
            hydrophobic_cysteine: 1.0,
            cysteine_cysteine: 2.5,
        }
    }

    /// A simplified weighting: hydrophobic contacts only, unit weight.
    pub fn hydrophobic_only() -> Self {
        Self {
            hydrophobic_hydrophobic: 1.0,
            hydrophobic_cysteine: 0.0,
            cysteine_cysteine: 0.0,
        }
    }

    /// Weight of a contact between residues of kinds `a` and `b`. Symmetric;
    /// any pair involving a polar residue weighs nothing.
    pub fn pair(&self, a: ResidueKind, b: ResidueKind) -> f64 {
        use ResidueKind::*;
        match (a, b) {
            (Hydrophobic, Hydrophobic) => self.hydrophobic_hydrophobic,
            (Hydrophobic, Cysteine) | (Cysteine, Hydrophobic) => self.hydrophobic_cysteine,
            (Cysteine, Cysteine) => self.cysteine_cysteine,
            _ => 0.0,
        }
    }
}

impl Default for BondWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Outcome of scoring a placement: the total contact energy and the
/// contributing residue pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReport {
    pub score: f64,
    /// Contributing contacts as `(i, j)` with `i < j`, in chain order.
    pub pairs: Vec<(usize, usize)>,
}

impl ContactReport {
    /// The set of residue indices participating in at least one scoring
    /// contact.
    pub fn bonded_residues(&self) -> BTreeSet<usize> {
        self.pairs.iter().flat_map(|&(i, j)| [i, j]).collect()
    }
}

/// Evaluates the contact energy of completed or partial placements.
///
/// A contact is an unordered pair of residues that are lattice-adjacent but
/// not consecutive in the chain; each contact contributes its table weight
/// exactly once. Consecutive residues are adjacent by construction (the move
/// between them is a unit step), which is why they are excluded here rather
/// than re-tested geometrically.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: BondWeights,
}

impl Scorer {
    pub fn new(weights: BondWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &BondWeights {
        &self.weights
    }

    /// Scores a completed walk. Self-avoidance is guaranteed by `Walk`
    /// construction, so every occupant lookup is unambiguous.
    pub fn score(&self, chain: &Chain, walk: &Walk) -> ContactReport {
        self.score_placed(chain.residues(), walk.coords())
    }

    /// Scores the leading `coords.len()` residues of a chain placed at
    /// `coords`. Used directly by the lookahead planner on partial
    /// placements; `kinds` and `coords` must be equally long and the
    /// coordinates pairwise distinct.
    pub fn score_placed(&self, kinds: &[ResidueKind], coords: &[Coord]) -> ContactReport {
        debug_assert_eq!(kinds.len(), coords.len());

        let lattice = Lattice::from_coords(coords);
        let mut score = 0.0;
        let mut pairs = Vec::new();

        for (i, &pos) in coords.iter().enumerate() {
            for (_, occupant) in lattice.neighbors(pos) {
                // Counting only j > i + 1 visits each contact once and
                // skips the backbone neighbors i - 1 and i + 1.
                let Some(j) = occupant else { continue };
                if j <= i + 1 {
                    continue;
                }
                let weight = self.weights.pair(kinds[i], kinds[j]);
                if weight > 0.0 {
                    score += weight;
                    pairs.push((i, j));
                }
            }
        }

        ContactReport { score, pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::moves::Move;

    fn score_of(sequence: &str, moves: &[Move]) -> ContactReport {
        let chain: Chain = sequence.parse().unwrap();
        let walk = Walk::from_moves(&chain, moves).unwrap();
        Scorer::new(BondWeights::standard()).score(&chain, &walk)
    }

    #[test]
    fn open_walk_scores_zero() {
        // (0,0) (1,0) (1,1): residues 0 and 2 are not lattice-adjacent.
        let report = score_of("HHH", &[Move::Right, Move::Up]);
        assert_eq!(report.score, 0.0);
        assert!(report.pairs.is_empty());
    }

    #[test]
    fn closed_hpph_fold_scores_one_half() {
        // R U L closes residues 0 and 3 into vertical adjacency.
        let report = score_of("HPPH", &[Move::Right, Move::Up, Move::Left]);
        assert_eq!(report.score, 0.5);
        assert_eq!(report.pairs, vec![(0, 3)]);
        assert_eq!(
            report.bonded_residues().into_iter().collect::<Vec<_>>(),
            vec![0, 3]
        );
    }

    #[test]
    fn polar_contacts_never_score() {
        let report = score_of("PHHP", &[Move::Right, Move::Up, Move::Left]);
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn cysteine_pairs_use_their_table_weights() {
        assert_eq!(
            score_of("CPPC", &[Move::Right, Move::Up, Move::Left]).score,
            2.5
        );
        assert_eq!(
            score_of("HPPC", &[Move::Right, Move::Up, Move::Left]).score,
            1.0
        );
        assert_eq!(
            score_of("CPPH", &[Move::Right, Move::Up, Move::Left]).score,
            1.0
        );
    }

    #[test]
    fn interior_contacts_count_once_each() {
        // A 2x3 serpentine (R U L U R) creates exactly two non-backbone
        // contacts, (0,3) and (2,5); neither may be double-counted.
        let moves = [Move::Right, Move::Up, Move::Left, Move::Up, Move::Right];
        let report = score_of("HHHHHH", &moves);
        assert_eq!(report.pairs, vec![(0, 3), (2, 5)]);
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn hydrophobic_only_table_zeroes_cysteine() {
        let chain: Chain = "CPPC".parse().unwrap();
        let walk = Walk::from_moves(&chain, &[Move::Right, Move::Up, Move::Left]).unwrap();
        let scorer = Scorer::new(BondWeights::hydrophobic_only());
        assert_eq!(scorer.score(&chain, &walk).score, 0.0);

        let chain: Chain = "HPPH".parse().unwrap();
        let walk = Walk::from_moves(&chain, &[Move::Right, Move::Up, Move::Left]).unwrap();
        assert_eq!(scorer.score(&chain, &walk).score, 1.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let moves = [Move::Right, Move::Up, Move::Left];
        let first = score_of("HCPH", &moves);
        let second = score_of("HCPH", &moves);
        assert_eq!(first, second);
    }

    #[test]
    fn partial_placement_scores_prefix_contacts() {
        let chain: Chain = "HPPHH".parse().unwrap();
        let coords = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
        ];
        let scorer = Scorer::new(BondWeights::standard());
        let report = scorer.score_placed(&chain.residues()[..4], &coords);
        assert_eq!(report.score, 0.5);
        assert_eq!(report.pairs, vec![(0, 3)]);
    }
}

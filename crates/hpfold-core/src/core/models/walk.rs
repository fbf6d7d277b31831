use super::chain::Chain;
use super::moves::Move;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WalkError {
    #[error("Move {index} revisits an occupied lattice cell")]
    SelfIntersection { index: usize },

    #[error("Chain of length {chain_len} requires {expected} moves, got {found}")]
    LengthMismatch {
        chain_len: usize,
        expected: usize,
        found: usize,
    },
}

/// An integer lattice position. The first residue of every walk sits at the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, m: Move) -> Self {
        let (dx, dy) = m.offset();
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Lattice adjacency: unit Manhattan distance.
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// A completed self-avoiding placement of a chain on the lattice.
///
/// A `Walk` is fully determined by its move sequence; the coordinate sequence
/// is the cumulative translation from the origin. Construction fails rather
/// than ever representing a self-intersecting placement, so downstream code
/// (the scorer in particular) can take self-avoidance for granted.
/// Serialization is one-way for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Walk {
    moves: Vec<Move>,
    coords: Vec<Coord>,
}

impl Walk {
    /// Builds the walk for `chain` from `moves`, enforcing self-avoidance.
    pub fn from_moves(chain: &Chain, moves: &[Move]) -> Result<Self, WalkError> {
        let expected = chain.len() - 1;
        if moves.len() != expected {
            return Err(WalkError::LengthMismatch {
                chain_len: chain.len(),
                expected,
                found: moves.len(),
            });
        }

        let mut coords = Vec::with_capacity(chain.len());
        let mut occupied = HashSet::with_capacity(chain.len());
        let mut tip = Coord::ORIGIN;
        coords.push(tip);
        occupied.insert(tip);

        for (index, &m) in moves.iter().enumerate() {
            tip = tip.translate(m);
            if !occupied.insert(tip) {
                return Err(WalkError::SelfIntersection { index });
            }
            coords.push(tip);
        }

        Ok(Self {
            moves: moves.to_vec(),
            coords,
        })
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of placed residues.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Position of the last placed residue.
    pub fn tip(&self) -> Coord {
        *self.coords.last().expect("walk always places the origin")
    }

    /// The move string in U/D/L/R letters, e.g. `"RUL"`.
    pub fn route(&self) -> String {
        self.moves.iter().map(|m| m.symbol()).collect()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One lattice step relative to the previous residue's position.
///
/// The signed-step encoding (vertical moves ±2, horizontal moves ±1)
/// preserves the invariant `opposite(m) = -m`, which the scorer relies on to
/// exclude backbone neighbors from contact counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// The fixed order in which every search strategy tries moves.
    pub const CANONICAL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Signed-step encoding: Up/Down are ±2, Right/Left are ±1.
    pub fn step(self) -> i8 {
        match self {
            Move::Up => 2,
            Move::Down => -2,
            Move::Right => 1,
            Move::Left => -1,
        }
    }

    pub fn from_step(step: i8) -> Option<Self> {
        match step {
            2 => Some(Move::Up),
            -2 => Some(Move::Down),
            1 => Some(Move::Right),
            -1 => Some(Move::Left),
            _ => None,
        }
    }

    /// The move undoing this one; `m.opposite().step() == -m.step()`.
    pub fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Lattice translation of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Move::Up => (0, 1),
            Move::Down => (0, -1),
            Move::Right => (1, 0),
            Move::Left => (-1, 0),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Right => 'R',
            Move::Left => 'L',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_negates_the_step_encoding() {
        for m in Move::CANONICAL {
            assert_eq!(m.opposite().step(), -m.step());
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for m in Move::CANONICAL {
            assert_eq!(m.opposite().opposite(), m);
        }
    }

    #[test]
    fn step_encoding_round_trips() {
        for m in Move::CANONICAL {
            assert_eq!(Move::from_step(m.step()), Some(m));
        }
        assert_eq!(Move::from_step(0), None);
        assert_eq!(Move::from_step(3), None);
    }

    #[test]
    fn offsets_are_unit_lattice_steps() {
        for m in Move::CANONICAL {
            let (dx, dy) = m.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn canonical_order_is_fixed() {
        assert_eq!(
            Move::CANONICAL,
            [Move::Up, Move::Right, Move::Down, Move::Left]
        );
    }
}

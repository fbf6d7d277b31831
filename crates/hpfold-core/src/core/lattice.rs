use super::models::moves::Move;
use super::models::residue::ResidueKind;
use super::models::walk::{Coord, Walk};
use std::collections::HashMap;

/// Sparse occupancy map for one construction attempt.
///
/// Maps lattice cells to the chain index of the residue occupying them. The
/// map is unbounded, so walks can never run off a grid edge. A lattice is
/// owned by exactly one construction attempt and rebuilt for the next one;
/// it is never shared across attempts or threads.
#[derive(Debug, Clone, Default)]
pub struct Lattice {
    cells: HashMap<Coord, usize>,
}

impl Lattice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupancy snapshot of a (possibly partial) walk.
    pub fn from_coords(coords: &[Coord]) -> Self {
        let cells = coords
            .iter()
            .enumerate()
            .map(|(index, &c)| (c, index))
            .collect();
        Self { cells }
    }

    pub fn from_walk(walk: &Walk) -> Self {
        Self::from_coords(walk.coords())
    }

    /// Marks `pos` as occupied by residue `index`. Returns `false` (leaving
    /// the lattice unchanged) if the cell is already taken.
    pub fn occupy(&mut self, pos: Coord, index: usize) -> bool {
        match self.cells.entry(pos) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(index);
                true
            }
        }
    }

    pub fn occupant(&self, pos: Coord) -> Option<usize> {
        self.cells.get(&pos).copied()
    }

    pub fn is_free(&self, pos: Coord) -> bool {
        !self.cells.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The four neighbor cells of `pos` in canonical move order, each with
    /// the index of its occupant if any.
    pub fn neighbors(&self, pos: Coord) -> [(Move, Option<usize>); 4] {
        Move::CANONICAL.map(|m| (m, self.occupant(pos.translate(m))))
    }

    /// Directions from `pos` whose target cell is unoccupied, in canonical
    /// order.
    pub fn free_directions(&self, pos: Coord) -> Vec<Move> {
        Move::CANONICAL
            .into_iter()
            .filter(|&m| self.is_free(pos.translate(m)))
            .collect()
    }

    /// Whether any neighbor of `pos` holds a hydrophobic or cysteine residue
    /// of `kinds`. Used by the preference-biased random constructor.
    pub fn has_bonding_neighbor(&self, pos: Coord, kinds: &[ResidueKind]) -> bool {
        self.neighbors(pos)
            .into_iter()
            .any(|(_, occupant)| occupant.is_some_and(|index| kinds[index].is_bonding()))
    }
}

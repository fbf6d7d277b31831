use crate::core::models::moves::Move;
use std::collections::VecDeque;

/// Lazy breadth-first enumeration of every move sequence of a fixed length.
///
/// The work queue starts from the empty sequence and expands each partial
/// sequence by all four moves in canonical order, yielding exactly
/// `4^target_len` complete sequences in a deterministic order. The iterator
/// is finite and not restartable; a fresh call regenerates independently.
#[derive(Debug)]
pub struct MoveSequences {
    target_len: usize,
    queue: VecDeque<Vec<Move>>,
}

impl MoveSequences {
    /// Enumerates all sequences of exactly `target_len` moves.
    pub fn new(target_len: usize) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(Vec::new());
        Self { target_len, queue }
    }

    /// Number of sequences a full enumeration will yield.
    pub fn total(target_len: usize) -> u64 {
        4u64.pow(target_len as u32)
    }
}

impl Iterator for MoveSequences {
    type Item = Vec<Move>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(partial) = self.queue.pop_front() {
            if partial.len() == self.target_len {
                return Some(partial);
            }
            for m in Move::CANONICAL {
                let mut child = partial.clone();
                child.push(m);
                self.queue.push_back(child);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn yields_four_to_the_length_sequences() {
        for len in 0..=5 {
            let produced = MoveSequences::new(len).count() as u64;
            assert_eq!(produced, MoveSequences::total(len));
        }
    }

    #[test]
    fn sequences_are_distinct() {
        let all: Vec<Vec<Move>> = MoveSequences::new(4).collect();
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn every_sequence_has_the_target_length() {
        assert!(MoveSequences::new(3).all(|seq| seq.len() == 3));
    }

    #[test]
    fn expansion_order_is_canonical() {
        let all: Vec<Vec<Move>> = MoveSequences::new(1).collect();
        assert_eq!(
            all,
            vec![
                vec![Move::Up],
                vec![Move::Right],
                vec![Move::Down],
                vec![Move::Left]
            ]
        );
    }

    #[test]
    fn zero_length_enumeration_yields_the_empty_sequence() {
        let all: Vec<Vec<Move>> = MoveSequences::new(0).collect();
        assert_eq!(all, vec![Vec::new()]);
    }

    #[test]
    fn fresh_enumerations_are_independent() {
        let first: Vec<_> = MoveSequences::new(2).collect();
        let second: Vec<_> = MoveSequences::new(2).collect();
        assert_eq!(first, second);
    }
}

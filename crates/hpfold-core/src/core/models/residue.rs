use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a residue in the HP lattice model.
///
/// Parsing is case-sensitive: `'H'` and `'C'` map to their kinds, every
/// other character is treated as polar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidueKind {
    Hydrophobic,
    Cysteine,
    Polar,
}

impl ResidueKind {
    pub fn from_char(c: char) -> Self {
        match c {
            'H' => ResidueKind::Hydrophobic,
            'C' => ResidueKind::Cysteine,
            _ => ResidueKind::Polar,
        }
    }

    /// Whether contacts with this residue can ever contribute to the score.
    pub fn is_bonding(self) -> bool {
        !matches!(self, ResidueKind::Polar)
    }

    pub fn symbol(self) -> char {
        match self {
            ResidueKind::Hydrophobic => 'H',
            ResidueKind::Cysteine => 'C',
            ResidueKind::Polar => 'P',
        }
    }
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hydrophobic_and_cysteine_case_sensitively() {
        assert_eq!(ResidueKind::from_char('H'), ResidueKind::Hydrophobic);
        assert_eq!(ResidueKind::from_char('C'), ResidueKind::Cysteine);
        assert_eq!(ResidueKind::from_char('h'), ResidueKind::Polar);
        assert_eq!(ResidueKind::from_char('c'), ResidueKind::Polar);
    }

    #[test]
    fn every_other_character_is_polar() {
        for c in ['P', 'p', 'X', '0', ' '] {
            assert_eq!(ResidueKind::from_char(c), ResidueKind::Polar);
        }
    }

    #[test]
    fn only_polar_is_non_bonding() {
        assert!(ResidueKind::Hydrophobic.is_bonding());
        assert!(ResidueKind::Cysteine.is_bonding());
        assert!(!ResidueKind::Polar.is_bonding());
    }
}

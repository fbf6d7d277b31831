use super::residue::ResidueKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ChainError {
    #[error("Chain must contain at least 2 residues, got {len}")]
    TooShort { len: usize },
}

/// An immutable ordered sequence of residues to be folded.
///
/// A chain is fixed for the lifetime of a search session; strategies only
/// ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    residues: Vec<ResidueKind>,
}

impl Chain {
    pub fn new(residues: Vec<ResidueKind>) -> Result<Self, ChainError> {
        if residues.len() < 2 {
            return Err(ChainError::TooShort {
                len: residues.len(),
            });
        }
        Ok(Self { residues })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn kind(&self, index: usize) -> ResidueKind {
        self.residues[index]
    }

    pub fn residues(&self) -> &[ResidueKind] {
        &self.residues
    }
}

impl FromStr for Chain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::new(s.chars().map(ResidueKind::from_char).collect())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_sequence() {
        let chain: Chain = "HCPXH".parse().unwrap();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.kind(0), ResidueKind::Hydrophobic);
        assert_eq!(chain.kind(1), ResidueKind::Cysteine);
        assert_eq!(chain.kind(2), ResidueKind::Polar);
        assert_eq!(chain.kind(3), ResidueKind::Polar);
        assert_eq!(chain.kind(4), ResidueKind::Hydrophobic);
    }

    #[test]
    fn rejects_chains_shorter_than_two() {
        assert_eq!("".parse::<Chain>(), Err(ChainError::TooShort { len: 0 }));
        assert_eq!("H".parse::<Chain>(), Err(ChainError::TooShort { len: 1 }));
        assert!("HH".parse::<Chain>().is_ok());
    }

    #[test]
    fn display_normalizes_polar_residues() {
        let chain: Chain = "HxC".parse().unwrap();
        assert_eq!(chain.to_string(), "HPC");
    }
}

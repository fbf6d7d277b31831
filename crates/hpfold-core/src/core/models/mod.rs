pub mod chain;
pub mod moves;
pub mod residue;
pub mod walk;

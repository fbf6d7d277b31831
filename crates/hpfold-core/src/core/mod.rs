pub mod lattice;
pub mod models;
pub mod scoring;

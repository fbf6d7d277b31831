//! # HPFold Core Library
//!
//! A search engine for protein folding on the 2D square-lattice HP model:
//! residues typed Hydrophobic, Cysteine or Polar are placed along a
//! self-avoiding walk, and a fold is scored by the favorable non-backbone
//! contacts it creates.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict dependency direction,
//! keeping the data model, the algorithms and the public surface separable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Chain`, `Move`,
//!   `Walk`), the sparse occupancy [`core::lattice::Lattice`], and the
//!   contact [`core::scoring::Scorer`] with its data-driven bond-weight
//!   table. All coordinate arithmetic lives here and nowhere else.
//!
//! - **[`engine`]: The Search Strategies.** Exhaustive enumeration over all
//!   move sequences, randomized multi-restart construction, and the
//!   bounded-horizon lookahead planner, together with their configuration
//!   and error types.
//!
//! - **[`workflows`]: The Public API.** Ties the engine and core together
//!   behind a single [`workflows::search::run`] entry point that selects a
//!   strategy and returns the best fold found.

pub mod core;
pub mod engine;
pub mod workflows;

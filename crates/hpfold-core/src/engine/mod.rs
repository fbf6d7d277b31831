pub mod config;
pub mod enumerate;
pub mod error;
pub mod exhaustive;
pub mod lookahead;
pub mod random;

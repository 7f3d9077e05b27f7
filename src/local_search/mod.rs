//! Local search for maximum clique.
//!
//! A single-solution trajectory method seeded by greedy restarts. It moves
//! through two neighbourhoods: single-vertex addition and 2-for-2 member
//! swap, and stops at the first iteration where neither improves.
//!
//! # References
//!
//! - Grosso, Locatelli & Pullan (2008), "Simple ingredients leading to very
//!   efficient heuristics for the maximum clique problem"

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{LocalSearch, LocalSearchResult};

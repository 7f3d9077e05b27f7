//! Greedy clique heuristics.
//!
//! Each heuristic returns a valid (usually maximal) clique in polynomial
//! time with no optimality guarantee.
//!
//! - [`GreedyDegree`]: highest candidate-restricted degree first
//! - [`GreedyRestarts`]: randomized construction repeated `num_restarts` times
//! - [`GreedyMinDegree`]: peel minimum-degree vertices until a clique remains
//! - [`GreedyCore`]: visit vertices by descending core number
//! - [`ColoringGreedy`]: scan greedy colour classes in ascending order
//!
//! # References
//!
//! - Batagelj & Zaversnik (2003), "An O(m) Algorithm for Cores Decomposition of Networks"
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"

mod coloring;
mod degree;
mod kcore;
mod min_degree;
mod restarts;

pub use coloring::{greedy_coloring, ColoringGreedy};
pub use degree::GreedyDegree;
pub use kcore::{core_numbers, GreedyCore};
pub use min_degree::GreedyMinDegree;
pub use restarts::{GreedyRestarts, GreedyRestartsConfig};

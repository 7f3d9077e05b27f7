//! Maximum clique solvers over simple undirected graphs.
//!
//! Provides a family of algorithms behind one [`CliqueSolver`] interface:
//!
//! - **Exact**: lexicographic brute force, branch-and-bound backtracking,
//!   bitmask dynamic programming, and a divide-and-conquer dispatcher that
//!   solves each connected component with the cheapest suitable method.
//! - **Greedy**: by degree, randomized with restarts, minimum-degree
//!   peeling, core-decomposition guided, and colour-class construction.
//! - **Local Search**: add / 2-swap improvement seeded by greedy restarts.
//! - **Genetic Algorithm**: elitist GA with union crossover and greedy repair.
//!
//! Every solver returns a valid clique; exact solvers return a maximum one.
//! [`SolverKind`] builds any solver by name.
//!
//! # Example
//!
//! ```
//! use u_clique::exact::Backtracking;
//! use u_clique::{CliqueSolver, Graph};
//!
//! let g = Graph::from_edge_list(5, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)]).unwrap();
//! let clique = Backtracking::new(&g).solve();
//! assert_eq!(clique, [0, 1, 2].into_iter().collect());
//! ```

pub mod error;
pub mod exact;
pub mod genetic;
pub mod graph;
pub mod greedy;
pub mod local_search;
pub mod random;
pub mod solver;

pub use error::{CliqueError, Result};
pub use graph::{Clique, Graph, VertexId};
pub use solver::{CliqueSolver, SolverKind};

//! Common solver interface and name-based registry.
//!
//! Every algorithm implements [`CliqueSolver`]. A harness that only knows an
//! algorithm by name goes through [`SolverKind`]:
//!
//! ```
//! use u_clique::{Graph, SolverKind};
//!
//! let g = Graph::from_edge_list(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
//! let solver = "backtracking".parse::<SolverKind>().unwrap().build(&g, None).unwrap();
//! assert_eq!(solver.solve().len(), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{CliqueError, Result};
use crate::exact::{BitmaskDp, Backtracking, BruteForce, DivideConquer};
use crate::genetic::{GeneticAlgorithm, GeneticConfig};
use crate::graph::{Clique, Graph};
use crate::greedy::{
    ColoringGreedy, GreedyCore, GreedyDegree, GreedyMinDegree, GreedyRestarts,
    GreedyRestartsConfig,
};
use crate::local_search::{LocalSearch, LocalSearchConfig};

/// A maximum clique algorithm bound to the graph it was built with.
///
/// Solvers own a private copy of their graph, so `solve` may be called any
/// number of times. Randomized solvers derive their RNG from the configured
/// seed on each call: with a fixed seed, repeated calls agree.
pub trait CliqueSolver {
    /// Stable identifier (`"backtracking"`, `"genetic"`, ...).
    fn name(&self) -> &'static str;

    /// Returns a clique of the solver's graph. Exact solvers return a
    /// maximum one; the empty graph always yields the empty set.
    fn solve(&self) -> Clique;
}

/// Every solver this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SolverKind {
    BruteForce,
    Backtracking,
    DivideConquer,
    BitmaskDp,
    GreedyDegree,
    GreedyRestarts,
    GreedyMinDegree,
    GreedyCore,
    Coloring,
    LocalSearch,
    Genetic,
}

impl SolverKind {
    /// All kinds, exact solvers first.
    pub const ALL: [SolverKind; 11] = [
        SolverKind::BruteForce,
        SolverKind::Backtracking,
        SolverKind::DivideConquer,
        SolverKind::BitmaskDp,
        SolverKind::GreedyDegree,
        SolverKind::GreedyRestarts,
        SolverKind::GreedyMinDegree,
        SolverKind::GreedyCore,
        SolverKind::Coloring,
        SolverKind::LocalSearch,
        SolverKind::Genetic,
    ];

    /// Identifier matching [`CliqueSolver::name`] of the built solver.
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::BruteForce => "brute_force",
            SolverKind::Backtracking => "backtracking",
            SolverKind::DivideConquer => "divide_conquer",
            SolverKind::BitmaskDp => "bitmask_dp",
            SolverKind::GreedyDegree => "greedy_degree",
            SolverKind::GreedyRestarts => "greedy_restarts",
            SolverKind::GreedyMinDegree => "greedy_min_degree",
            SolverKind::GreedyCore => "greedy_core",
            SolverKind::Coloring => "coloring",
            SolverKind::LocalSearch => "local_search",
            SolverKind::Genetic => "genetic",
        }
    }

    /// Whether the solver always returns a maximum clique.
    pub fn is_exact(self) -> bool {
        matches!(
            self,
            SolverKind::BruteForce
                | SolverKind::Backtracking
                | SolverKind::DivideConquer
                | SolverKind::BitmaskDp
        )
    }

    /// Whether the solver consumes randomness (and therefore a seed).
    pub fn is_randomized(self) -> bool {
        matches!(
            self,
            SolverKind::GreedyRestarts | SolverKind::LocalSearch | SolverKind::Genetic
        )
    }

    /// Builds the solver over `graph` with default parameters.
    ///
    /// `seed` is applied to randomized solvers and ignored by the rest.
    /// Fails only for [`SolverKind::BitmaskDp`] on graphs above its vertex
    /// ceiling.
    pub fn build(self, graph: &Graph, seed: Option<u64>) -> Result<Box<dyn CliqueSolver>> {
        let solver: Box<dyn CliqueSolver> = match self {
            SolverKind::BruteForce => Box::new(BruteForce::new(graph)),
            SolverKind::Backtracking => Box::new(Backtracking::new(graph)),
            SolverKind::DivideConquer => Box::new(DivideConquer::new(graph)),
            SolverKind::BitmaskDp => Box::new(BitmaskDp::new(graph)?),
            SolverKind::GreedyDegree => Box::new(GreedyDegree::new(graph)),
            SolverKind::GreedyMinDegree => Box::new(GreedyMinDegree::new(graph)),
            SolverKind::GreedyCore => Box::new(GreedyCore::new(graph)),
            SolverKind::Coloring => Box::new(ColoringGreedy::new(graph)),
            SolverKind::GreedyRestarts => {
                let mut config = GreedyRestartsConfig::default();
                config.seed = seed;
                Box::new(GreedyRestarts::with_config(graph, config)?)
            }
            SolverKind::LocalSearch => {
                let mut config = LocalSearchConfig::default();
                config.seed = seed;
                Box::new(LocalSearch::with_config(graph, config)?)
            }
            SolverKind::Genetic => {
                let mut config = GeneticConfig::default();
                config.seed = seed;
                Box::new(GeneticAlgorithm::with_config(graph, config)?)
            }
        };
        Ok(solver)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = CliqueError;

    fn from_str(s: &str) -> Result<Self> {
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| CliqueError::InvalidConfig(format!("unknown solver: {s}")))
    }
}

//! Connected-component dispatch.
//!
//! No clique spans two components, so solving each induced component
//! independently and keeping the largest answer preserves optimality. On a
//! connected input this reduces to one exact solve of the whole graph.

use crate::graph::{Clique, Graph};
use crate::solver::CliqueSolver;

use super::backtracking::Backtracking;
use super::brute_force::BruteForce;

/// Configuration for [`DivideConquer`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DivideConquerConfig {
    /// Components with at most this many vertices are solved by brute
    /// force; larger ones by branch-and-bound backtracking.
    pub brute_force_threshold: usize,
}

impl Default for DivideConquerConfig {
    fn default() -> Self {
        Self {
            brute_force_threshold: 20,
        }
    }
}

impl DivideConquerConfig {
    /// Sets the brute-force component size threshold.
    pub fn with_brute_force_threshold(mut self, n: usize) -> Self {
        self.brute_force_threshold = n;
        self
    }
}

/// Result of a divide-and-conquer run.
#[derive(Debug, Clone)]
pub struct DivideConquerResult {
    /// Largest clique across all components.
    pub best: Clique,
    /// Number of connected components (isolated vertices included).
    pub components: usize,
}

/// Component-wise exact solver.
#[derive(Debug, Clone)]
pub struct DivideConquer {
    graph: Graph,
    config: DivideConquerConfig,
}

impl DivideConquer {
    /// Creates a solver with the default threshold.
    pub fn new(graph: &Graph) -> Self {
        Self::with_config(graph, DivideConquerConfig::default())
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(graph: &Graph, config: DivideConquerConfig) -> Self {
        Self {
            graph: graph.clone(),
            config,
        }
    }

    /// Solves every component and reports the component count.
    pub fn run(&self) -> DivideConquerResult {
        let components = self.graph.connected_components();
        let mut best = Clique::new();

        for component in &components {
            let sub = self.graph.induced_subgraph(component);
            let clique = if component.len() <= self.config.brute_force_threshold {
                BruteForce::new(&sub).solve()
            } else {
                Backtracking::new(&sub).solve()
            };
            if clique.len() > best.len() {
                best = clique;
            }
        }

        DivideConquerResult {
            best,
            components: components.len(),
        }
    }
}

impl CliqueSolver for DivideConquer {
    fn name(&self) -> &'static str {
        "divide_conquer"
    }

    fn solve(&self) -> Clique {
        self.run().best
    }
}

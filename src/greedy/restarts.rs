//! Randomized greedy construction with restarts.

use rand::Rng;

use crate::error::{CliqueError, Result};
use crate::graph::{Clique, Graph, VertexId};
use crate::random::{rng_from_seed, shuffle};
use crate::solver::CliqueSolver;

/// Configuration for [`GreedyRestarts`].
///
/// # Examples
///
/// ```
/// use u_clique::greedy::GreedyRestartsConfig;
///
/// let config = GreedyRestartsConfig::default().with_seed(42);
/// assert_eq!(config.num_restarts, 10);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyRestartsConfig {
    /// Number of independent randomized constructions.
    pub num_restarts: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GreedyRestartsConfig {
    fn default() -> Self {
        Self {
            num_restarts: 10,
            seed: None,
        }
    }
}

impl GreedyRestartsConfig {
    /// Sets the number of restarts.
    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.num_restarts == 0 {
            return Err("num_restarts must be at least 1".into());
        }
        Ok(())
    }
}

/// Repeats a randomized greedy construction and keeps the largest clique.
///
/// Each run shuffles the vertex order, then repeatedly picks a uniformly
/// random candidate: if it is adjacent to the whole clique it joins and the
/// candidates shrink to its neighbourhood, otherwise it is dropped.
#[derive(Debug, Clone)]
pub struct GreedyRestarts {
    graph: Graph,
    config: GreedyRestartsConfig,
}

impl GreedyRestarts {
    /// Creates a solver with the default configuration (unseeded).
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
            config: GreedyRestartsConfig::default(),
        }
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(graph: &Graph, config: GreedyRestartsConfig) -> Result<Self> {
        config.validate().map_err(CliqueError::InvalidConfig)?;
        Ok(Self {
            graph: graph.clone(),
            config,
        })
    }

    /// Runs all restarts drawing randomness from `rng`.
    pub fn construct_with_rng<R: Rng>(&self, rng: &mut R) -> Clique {
        let mut order: Vec<VertexId> = self.graph.vertices().collect();
        let mut best = Clique::new();

        for _ in 0..self.config.num_restarts {
            shuffle(&mut order, rng);
            let clique = randomized_greedy(&self.graph, &order, rng);
            if clique.len() > best.len() {
                best = clique;
            }
        }

        best
    }
}

impl CliqueSolver for GreedyRestarts {
    fn name(&self) -> &'static str {
        "greedy_restarts"
    }

    fn solve(&self) -> Clique {
        let mut rng = rng_from_seed(self.config.seed);
        self.construct_with_rng(&mut rng)
    }
}

/// One randomized construction over the candidate list `order`.
fn randomized_greedy<R: Rng>(graph: &Graph, order: &[VertexId], rng: &mut R) -> Clique {
    let mut clique = Clique::new();
    let mut candidates = order.to_vec();

    while !candidates.is_empty() {
        let idx = rng.random_range(0..candidates.len());
        let v = candidates[idx];
        if graph.is_adjacent_to_all(v, &clique) {
            clique.insert(v);
            candidates.retain(|&u| graph.has_edge(v, u));
        } else {
            candidates.remove(idx);
        }
    }

    clique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn barbell() -> Graph {
        // two K4s joined by the edge 3-4
        Graph::from_edge_list(
            8,
            &[
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 2),
                (1, 3),
                (2, 3),
                (4, 5),
                (4, 6),
                (4, 7),
                (5, 6),
                (5, 7),
                (6, 7),
                (3, 4),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_valid_and_maximal() {
        let g = barbell();
        let solver =
            GreedyRestarts::with_config(&g, GreedyRestartsConfig::default().with_seed(1)).unwrap();
        let clique = solver.solve();
        assert!(g.is_clique(&clique));
        // every construction ends maximal; with 10 restarts a K4 is found
        assert_eq!(clique.len(), 4);
    }

    #[test]
    fn test_seeded_reproducible() {
        let g = barbell();
        let config = GreedyRestartsConfig::default()
            .with_num_restarts(3)
            .with_seed(99);
        let a = GreedyRestarts::with_config(&g, config.clone()).unwrap().solve();
        let b = GreedyRestarts::with_config(&g, config).unwrap().solve();
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_rng() {
        let g = barbell();
        let solver = GreedyRestarts::new(&g);
        let a = solver.construct_with_rng(&mut create_rng(5));
        let b = solver.construct_with_rng(&mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::with_vertices(5);
        let solver =
            GreedyRestarts::with_config(&g, GreedyRestartsConfig::default().with_seed(0)).unwrap();
        assert_eq!(solver.solve().len(), 1);
    }

    #[test]
    fn test_empty_graph() {
        assert!(GreedyRestarts::new(&Graph::new()).solve().is_empty());
    }

    #[test]
    fn test_zero_restarts_rejected() {
        let config = GreedyRestartsConfig::default().with_num_restarts(0);
        let err = GreedyRestarts::with_config(&Graph::new(), config).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidConfig(_)));
    }
}

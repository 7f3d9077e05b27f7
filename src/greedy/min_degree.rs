//! Minimum-degree peeling.

use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Peels minimum-degree vertices from a working copy until the remaining
/// vertex set is a clique.
///
/// A single vertex is always a clique, so any non-empty input yields a
/// non-empty result. Each round checks the remaining set in `Θ(k²)`.
#[derive(Debug, Clone)]
pub struct GreedyMinDegree {
    graph: Graph,
}

impl GreedyMinDegree {
    /// Creates a solver over a private copy of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }
}

impl CliqueSolver for GreedyMinDegree {
    fn name(&self) -> &'static str {
        "greedy_min_degree"
    }

    fn solve(&self) -> Clique {
        let mut work = self.graph.clone();

        while !work.is_empty() {
            let remaining: Vec<VertexId> = work.vertices().collect();
            if work.is_clique(&remaining) {
                return remaining.into_iter().collect();
            }
            // ties resolve to the lowest id
            let Some(v) = remaining.iter().copied().min_by_key(|&v| work.degree(v)) else {
                break;
            };
            work.remove_vertex(v);
        }

        Clique::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peels_to_k4() {
        // K4 on {0,1,2,3} with a path 3-4-5 hanging off
        let g = Graph::from_edge_list(
            6,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4), (4, 5)],
        )
        .unwrap();
        assert_eq!(GreedyMinDegree::new(&g).solve(), [0, 1, 2, 3].into_iter().collect());
    }

    #[test]
    fn test_input_graph_untouched() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let solver = GreedyMinDegree::new(&g);
        let clique = solver.solve();
        assert!(g.is_clique(&clique));
        assert_eq!(g.n(), 4);
        assert_eq!(g.m(), 3);
        assert_eq!(solver.solve(), clique);
    }

    #[test]
    fn test_no_edges() {
        let clique = GreedyMinDegree::new(&Graph::with_vertices(5)).solve();
        assert_eq!(clique, [4].into_iter().collect());
    }

    #[test]
    fn test_empty_graph() {
        assert!(GreedyMinDegree::new(&Graph::new()).solve().is_empty());
    }
}

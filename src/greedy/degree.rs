//! Greedy construction by candidate-restricted degree.

use std::collections::BTreeSet;

use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Picks, among the remaining candidates, the vertex with the most
/// neighbours inside the candidate set, then shrinks the candidates to its
/// neighbourhood. One monotone pass, `Θ(n²)` selections cost overall.
#[derive(Debug, Clone)]
pub struct GreedyDegree {
    graph: Graph,
}

impl GreedyDegree {
    /// Creates a solver over a private copy of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }
}

impl CliqueSolver for GreedyDegree {
    fn name(&self) -> &'static str {
        "greedy_degree"
    }

    fn solve(&self) -> Clique {
        let graph = &self.graph;
        let mut clique = Clique::new();
        let mut candidates: BTreeSet<VertexId> = graph.vertices().collect();

        while !candidates.is_empty() {
            // degree restricted to the current candidate set; ties keep the lowest id
            let mut selected = None;
            let mut selected_degree = 0;
            for &v in &candidates {
                let d = graph.neighbors(v).intersection(&candidates).count();
                if selected.is_none() || d > selected_degree {
                    selected = Some(v);
                    selected_degree = d;
                }
            }
            let Some(v) = selected else {
                break;
            };

            if graph.is_adjacent_to_all(v, &clique) {
                clique.insert(v);
                candidates = candidates
                    .intersection(graph.neighbors(v))
                    .copied()
                    .collect();
            } else {
                candidates.remove(&v);
            }
        }

        clique
    }
}

//! Clique construction guided by a greedy proper colouring.

use std::collections::BTreeMap;

use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Colours the graph greedily, then scans colour classes in ascending
/// colour order (each class in visiting order) and keeps every vertex
/// adjacent to all vertices kept so far.
///
/// A clique holds at most one vertex per colour class, so the scan picks
/// from each class in turn.
#[derive(Debug, Clone)]
pub struct ColoringGreedy {
    graph: Graph,
}

impl ColoringGreedy {
    /// Creates a solver over a private copy of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }
}

impl CliqueSolver for ColoringGreedy {
    fn name(&self) -> &'static str {
        "coloring"
    }

    fn solve(&self) -> Clique {
        let mut classes: BTreeMap<usize, Vec<VertexId>> = BTreeMap::new();
        for (v, color) in greedy_coloring(&self.graph) {
            classes.entry(color).or_default().push(v);
        }

        let mut clique = Clique::new();
        for members in classes.values() {
            for &v in members {
                if self.graph.is_adjacent_to_all(v, &clique) {
                    clique.insert(v);
                }
            }
        }
        clique
    }
}

/// Greedy proper colouring in descending-degree visiting order.
///
/// Each vertex takes the smallest colour not used by an already-coloured
/// neighbour. Returns `(vertex, colour)` pairs in visiting order.
pub fn greedy_coloring(graph: &Graph) -> Vec<(VertexId, usize)> {
    let mut colors: BTreeMap<VertexId, usize> = BTreeMap::new();
    let mut visited = Vec::with_capacity(graph.n());

    for v in graph.vertices_by_degree_desc() {
        let mut used: Vec<usize> = graph
            .neighbors(v)
            .iter()
            .filter_map(|u| colors.get(u).copied())
            .collect();
        used.sort_unstable();
        used.dedup();

        let color = used
            .iter()
            .enumerate()
            .find(|&(i, &c)| i != c)
            .map_or(used.len(), |(i, _)| i);

        colors.insert(v, color);
        visited.push((v, color));
    }

    visited
}

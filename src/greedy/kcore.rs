//! Core-decomposition-guided greedy construction.

use std::collections::BTreeMap;

use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Visits vertices by descending core number and keeps each one adjacent to
/// every vertex kept so far.
///
/// A high core number means the vertex survives deep into min-degree
/// peeling, which correlates with membership in dense neighbourhoods.
#[derive(Debug, Clone)]
pub struct GreedyCore {
    graph: Graph,
}

impl GreedyCore {
    /// Creates a solver over a private copy of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }
}

impl CliqueSolver for GreedyCore {
    fn name(&self) -> &'static str {
        "greedy_core"
    }

    fn solve(&self) -> Clique {
        let mut order = peel(&self.graph);
        // stable: equal cores keep removal order
        order.sort_by(|a, b| b.1.cmp(&a.1));

        let mut clique = Clique::new();
        for (v, _) in order {
            if self.graph.is_adjacent_to_all(v, &clique) {
                clique.insert(v);
            }
        }
        clique
    }
}

/// Core number of every vertex.
///
/// # Examples
///
/// ```
/// use u_clique::graph::Graph;
/// use u_clique::greedy::core_numbers;
///
/// // triangle with a pendant vertex
/// let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
/// let cores = core_numbers(&g);
/// assert_eq!(cores[&3], 1);
/// assert_eq!(cores[&0], 2);
/// ```
pub fn core_numbers(graph: &Graph) -> BTreeMap<VertexId, usize> {
    peel(graph).into_iter().collect()
}

/// Min-degree peeling; returns `(vertex, core)` in removal order.
///
/// The present vertex of minimum current degree (lowest id on ties) is
/// removed and its degree recorded as its core. Present neighbours whose
/// degree exceeds it lose one, so degrees never drop below the running core.
fn peel(graph: &Graph) -> Vec<(VertexId, usize)> {
    let mut degree: BTreeMap<VertexId, usize> =
        graph.vertices().map(|v| (v, graph.degree(v))).collect();
    let mut removal = Vec::with_capacity(degree.len());

    loop {
        let Some((v, d)) = degree
            .iter()
            .min_by_key(|&(_, &d)| d)
            .map(|(&v, &d)| (v, d))
        else {
            break;
        };
        degree.remove(&v);
        for u in graph.neighbors(v) {
            if let Some(du) = degree.get_mut(u) {
                if *du > d {
                    *du -= 1;
                }
            }
        }
        removal.push((v, d));
    }

    removal
}

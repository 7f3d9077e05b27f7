//! Branch-and-bound backtracking.
//!
//! # Algorithm
//!
//! 1. Order vertices by descending degree (ties by ascending id)
//! 2. From cursor `start`, try to extend the partial clique with every
//!    later vertex adjacent to all current members
//! 3. Record a new best only when the partial clique is strictly larger
//! 4. Prune when `|current| + (n - start) <= |best|`
//!
//! The bound is sound but loose: on a complete graph it never fires and the
//! search enumerates every subset.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{CliqueError, Result};
use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Result of a backtracking run.
#[derive(Debug, Clone)]
pub struct BacktrackResult {
    /// Largest clique found.
    pub best: Clique,
    /// Search nodes visited (recursive calls).
    pub nodes: u64,
    /// Nodes cut by the size bound.
    pub pruned: u64,
    /// Whether the run was cancelled externally. When set, `best` is the
    /// largest clique found before cancellation and may not be maximum.
    pub cancelled: bool,
}

/// Branch-and-bound maximum clique solver.
#[derive(Debug, Clone)]
pub struct Backtracking {
    graph: Graph,
    order: Vec<VertexId>,
}

impl Backtracking {
    /// Creates a solver over a private copy of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
            order: graph.vertices_by_degree_desc(),
        }
    }

    /// Runs the full search.
    pub fn run(&self) -> BacktrackResult {
        self.run_with_cancel(None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is polled at every search node; once it is set the search
    /// unwinds and returns the best clique found so far.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> BacktrackResult {
        let mut ctx = SearchContext {
            graph: &self.graph,
            order: &self.order,
            current: Vec::with_capacity(self.order.len()),
            best: Vec::new(),
            nodes: 0,
            pruned: 0,
            cancel: cancel.as_deref(),
            cancelled: false,
        };
        ctx.backtrack(0);

        BacktrackResult {
            best: ctx.best.iter().copied().collect(),
            nodes: ctx.nodes,
            pruned: ctx.pruned,
            cancelled: ctx.cancelled,
        }
    }
}

impl CliqueSolver for Backtracking {
    fn name(&self) -> &'static str {
        "backtracking"
    }

    fn solve(&self) -> Clique {
        self.run().best
    }
}

/// Mutable state threaded through the recursion.
struct SearchContext<'a> {
    graph: &'a Graph,
    order: &'a [VertexId],
    current: Vec<VertexId>,
    best: Vec<VertexId>,
    nodes: u64,
    pruned: u64,
    cancel: Option<&'a AtomicBool>,
    cancelled: bool,
}

impl SearchContext<'_> {
    fn backtrack(&mut self, start: usize) {
        self.nodes += 1;

        if let Some(flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.cancelled = true;
            }
        }
        if self.cancelled {
            return;
        }

        if self.current.len() + (self.order.len() - start) <= self.best.len() {
            self.pruned += 1;
            return;
        }

        for i in start..self.order.len() {
            let v = self.order[i];
            if !self.graph.is_adjacent_to_all(v, &self.current) {
                continue;
            }

            self.current.push(v);
            if self.current.len() > self.best.len() {
                self.best = self.current.clone();
            }
            self.backtrack(i + 1);
            self.current.pop();

            if self.cancelled {
                return;
            }
        }
    }
}

/// Finds any clique of exactly `k` vertices.
///
/// Start vertices are tried in descending-degree order; each branch only
/// considers later vertices in that order that are adjacent to every member
/// so far, and is abandoned when too few candidates remain to reach `k`.
///
/// # Errors
///
/// [`CliqueError::NoSolution`] when the graph has no `k`-clique.
pub fn find_k_clique(graph: &Graph, k: usize) -> Result<Clique> {
    if k == 0 {
        return Ok(Clique::new());
    }

    let order = graph.vertices_by_degree_desc();
    let mut current = Vec::with_capacity(k);
    for (pos, &start) in order.iter().enumerate() {
        let candidates: Vec<VertexId> = order[pos + 1..]
            .iter()
            .copied()
            .filter(|&u| graph.has_edge(start, u))
            .collect();

        current.push(start);
        if extend_to_k(graph, &mut current, &candidates, k) {
            return Ok(current.into_iter().collect());
        }
        current.pop();
    }

    Err(CliqueError::NoSolution { k })
}

fn extend_to_k(graph: &Graph, current: &mut Vec<VertexId>, candidates: &[VertexId], k: usize) -> bool {
    if current.len() == k {
        return true;
    }

    for (i, &v) in candidates.iter().enumerate() {
        if current.len() + (candidates.len() - i) < k {
            return false;
        }
        let next: Vec<VertexId> = candidates[i + 1..]
            .iter()
            .copied()
            .filter(|&u| graph.has_edge(v, u))
            .collect();

        current.push(v);
        if extend_to_k(graph, current, &next, k) {
            return true;
        }
        current.pop();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: usize) -> Graph {
        let edges: Vec<_> = (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
            .collect();
        Graph::from_edge_list(n, &edges).unwrap()
    }

    // ---- Maximum clique ----

    #[test]
    fn test_triangle() {
        let g = Graph::from_edge_list(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(Backtracking::new(&g).solve(), [0, 1, 2].into_iter().collect());
    }

    #[test]
    fn test_complete_graph_no_pruning_needed() {
        let g = complete(8);
        let result = Backtracking::new(&g).run();
        assert_eq!(result.best.len(), 8);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_pruning_fires_on_sparse_graph() {
        // K4 on {0,1,2,3} plus a pendant path
        let g = Graph::from_edge_list(
            7,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4), (4, 5), (5, 6)],
        )
        .unwrap();
        let result = Backtracking::new(&g).run();
        assert_eq!(result.best, [0, 1, 2, 3].into_iter().collect());
        assert!(result.pruned > 0);
    }

    #[test]
    fn test_first_improvement_wins_ties() {
        // two disjoint edges: highest-degree-first order is [0,1,2,3]
        let g = Graph::from_edge_list(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(Backtracking::new(&g).solve(), [0, 1].into_iter().collect());
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::with_vertices(5);
        assert_eq!(Backtracking::new(&g).solve().len(), 1);
    }

    #[test]
    fn test_empty_graph() {
        let result = Backtracking::new(&Graph::new()).run();
        assert!(result.best.is_empty());
    }

    #[test]
    fn test_cancel_before_start() {
        let g = complete(12);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = Backtracking::new(&g).run_with_cancel(Some(cancel));
        assert!(result.cancelled);
        assert!(result.best.is_empty());
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_solver_owns_graph_copy() {
        let mut g = Graph::from_edge_list(3, &[(0, 1)]).unwrap();
        let solver = Backtracking::new(&g);
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 2).unwrap();
        assert_eq!(solver.solve().len(), 2);
    }

    // ---- Fixed-size k-clique ----

    #[test]
    fn test_k_clique_found() {
        let g = complete(6);
        let clique = find_k_clique(&g, 4).unwrap();
        assert_eq!(clique.len(), 4);
        assert!(g.is_clique(&clique));
    }

    #[test]
    fn test_k_clique_zero() {
        assert!(find_k_clique(&Graph::new(), 0).unwrap().is_empty());
    }

    #[test]
    fn test_k_clique_no_solution() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let err = find_k_clique(&g, 3).unwrap_err();
        assert!(matches!(err, CliqueError::NoSolution { k: 3 }));
    }

    #[test]
    fn test_k_clique_larger_than_graph() {
        let g = complete(3);
        assert!(matches!(
            find_k_clique(&g, 4),
            Err(CliqueError::NoSolution { k: 4 })
        ));
    }
}

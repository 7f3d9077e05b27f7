//! Exhaustive subset enumeration.
//!
//! For `k = n, n-1, …, 1` every `k`-combination of the vertex list is tested
//! in lexicographic order; the first clique found is maximum. Across all `k`
//! this visits up to `2^n - 1` subsets, so it is only practical for roughly
//! 20 vertices or fewer.

use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Brute-force maximum clique solver.
#[derive(Debug, Clone)]
pub struct BruteForce {
    graph: Graph,
}

impl BruteForce {
    /// Creates a solver over a private copy of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
        }
    }
}

impl CliqueSolver for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn solve(&self) -> Clique {
        for k in (1..=self.graph.n()).rev() {
            if let Some(clique) = brute_force_k_clique(&self.graph, k) {
                return clique;
            }
        }
        Clique::new()
    }
}

/// Returns the first `k`-clique in lexicographic combination order over the
/// ascending vertex list, or `None` if there is none.
///
/// `k = 0` yields the empty set.
pub fn brute_force_k_clique(graph: &Graph, k: usize) -> Option<Clique> {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let n = vertices.len();
    if k > n {
        return None;
    }

    let mut idx: Vec<usize> = (0..k).collect();
    let mut candidate: Vec<VertexId> = Vec::with_capacity(k);
    loop {
        candidate.clear();
        candidate.extend(idx.iter().map(|&i| vertices[i]));
        if graph.is_clique(&candidate) {
            return Some(candidate.into_iter().collect());
        }
        if !next_combination(&mut idx, n) {
            return None;
        }
    }
}

/// Advances `idx` to the next `k`-combination of `0..n`. Returns `false`
/// once the last combination has been passed.
fn next_combination(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();
    let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
        return false;
    };
    idx[i] += 1;
    for j in i + 1..k {
        idx[j] = idx[j - 1] + 1;
    }
    true
}

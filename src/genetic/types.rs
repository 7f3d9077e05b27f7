//! Population member for the clique GA.

use crate::graph::{Clique, Graph};

/// A candidate clique with its cached fitness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliqueIndividual {
    /// Member vertices.
    pub members: Clique,
    /// Clique size if `members` is a valid clique, otherwise 0.
    pub fitness: usize,
}

impl CliqueIndividual {
    /// Wraps `members` and evaluates it against `graph`.
    pub fn evaluated(graph: &Graph, members: Clique) -> Self {
        let fitness = fitness(graph, &members);
        Self { members, fitness }
    }
}

/// Size of `members` when it is a clique of `graph`, else 0.
///
/// Construction and repair only ever produce valid cliques; invalid sets are
/// still scored so the function is total.
pub fn fitness(graph: &Graph, members: &Clique) -> usize {
    if graph.is_clique(members) {
        members.len()
    } else {
        0
    }
}

//! Clique-preserving genetic operators.
//!
//! Every operator maps cliques to cliques: construction and repair only keep
//! a vertex when it is adjacent to everything already kept, and mutation only
//! adds vertices adjacent to the whole set.
//!
//! - [`random_clique`]: shuffled greedy construction
//! - [`repair`]: descending-degree filter of an arbitrary vertex set
//! - [`crossover`]: union of two parents, then repair
//! - [`mutate`]: try to add up to `k` random non-members

use rand::seq::index;
use rand::Rng;

use crate::graph::{Clique, Graph, VertexId};
use crate::random::shuffle;

/// Builds a clique by visiting `vertices` in random order and keeping each
/// vertex adjacent to all kept so far.
pub fn random_clique<R: Rng>(graph: &Graph, vertices: &[VertexId], rng: &mut R) -> Clique {
    let mut order = vertices.to_vec();
    shuffle(&mut order, rng);

    let mut clique = Clique::new();
    for v in order {
        if graph.is_adjacent_to_all(v, &clique) {
            clique.insert(v);
        }
    }
    clique
}

/// Reduces `members` to a clique.
///
/// Vertices are visited by descending degree (ties by ascending id) and
/// kept iff adjacent to every vertex already kept.
pub fn repair(graph: &Graph, members: &Clique) -> Clique {
    let mut order: Vec<VertexId> = members.iter().copied().collect();
    order.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));

    let mut valid = Clique::new();
    for v in order {
        if graph.is_adjacent_to_all(v, &valid) {
            valid.insert(v);
        }
    }
    valid
}

/// Union crossover followed by [`repair`].
pub fn crossover(graph: &Graph, parent1: &Clique, parent2: &Clique) -> Clique {
    let union: Clique = parent1.union(parent2).copied().collect();
    repair(graph, &union)
}

/// Samples up to `max_additions` distinct non-members uniformly and adds
/// each one that is adjacent to the whole (growing) clique.
pub fn mutate<R: Rng>(
    graph: &Graph,
    clique: &mut Clique,
    vertices: &[VertexId],
    max_additions: usize,
    rng: &mut R,
) {
    let candidates: Vec<VertexId> = vertices
        .iter()
        .copied()
        .filter(|v| !clique.contains(v))
        .collect();
    let amount = max_additions.min(candidates.len());
    if amount == 0 {
        return;
    }

    for i in index::sample(rng, candidates.len(), amount) {
        let v = candidates[i];
        if graph.is_adjacent_to_all(v, &*clique) {
            clique.insert(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn two_k4_sharing_edge() -> Graph {
        // {0,1,2,3} and {2,3,4,5}, both K4
        Graph::from_edge_list(
            6,
            &[
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 2),
                (1, 3),
                (2, 3),
                (2, 4),
                (2, 5),
                (3, 4),
                (3, 5),
                (4, 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_random_clique_valid_and_maximal() {
        let g = two_k4_sharing_edge();
        let vertices: Vec<_> = g.vertices().collect();
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let c = random_clique(&g, &vertices, &mut rng);
            assert!(g.is_clique(&c));
            assert!(vertices
                .iter()
                .all(|&v| c.contains(&v) || !g.is_adjacent_to_all(v, &c)));
        }
    }

    #[test]
    fn test_repair_prefers_high_degree() {
        let g = two_k4_sharing_edge();
        // degrees: 2 and 3 have 5, the rest 3
        let all: Clique = (0..6).collect();
        let repaired = repair(&g, &all);
        assert_eq!(repaired, [0, 1, 2, 3].into_iter().collect());
    }

    #[test]
    fn test_crossover_of_overlapping_parents() {
        let g = two_k4_sharing_edge();
        let p1: Clique = [0, 2].into_iter().collect();
        let p2: Clique = [2, 3].into_iter().collect();
        assert_eq!(crossover(&g, &p1, &p2), [0, 2, 3].into_iter().collect());
    }

    #[test]
    fn test_mutate_keeps_clique() {
        let g = two_k4_sharing_edge();
        let vertices: Vec<_> = g.vertices().collect();
        let mut rng = create_rng(1);
        for _ in 0..20 {
            let mut c: Clique = [2].into_iter().collect();
            mutate(&g, &mut c, &vertices, 3, &mut rng);
            assert!(g.is_clique(&c));
            assert!(c.len() <= 4);
        }
    }

    #[test]
    fn test_mutate_on_full_set_is_noop() {
        let g = Graph::from_edge_list(2, &[(0, 1)]).unwrap();
        let mut c: Clique = [0, 1].into_iter().collect();
        mutate(&g, &mut c, &[0, 1], 3, &mut create_rng(0));
        assert_eq!(c.len(), 2);
    }
}

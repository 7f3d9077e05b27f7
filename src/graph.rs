//! Undirected simple graph stored as ordered adjacency sets.
//!
//! Ordered containers give every solver a deterministic iteration order
//! (ascending vertex id), which the exact solvers' tie-breaking relies on.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{BufRead, BufReader, Read};

use crate::error::{CliqueError, Result};

/// Vertex identifier. Need not be contiguous or zero-based.
pub type VertexId = usize;

/// A set of pairwise-adjacent vertices.
pub type Clique = BTreeSet<VertexId>;

/// Raw adjacency map: vertex → neighbour set.
pub type Adjacency = BTreeMap<VertexId, BTreeSet<VertexId>>;

/// Undirected graph without self-loops or weights.
///
/// Every constructor enforces symmetry, the absence of self-loops, and that
/// every neighbour is itself a vertex, so solvers can assume a well-formed
/// input.
///
/// # Examples
///
/// ```
/// use u_clique::graph::Graph;
///
/// let g = Graph::from_edge_list(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// assert_eq!(g.n(), 3);
/// assert_eq!(g.m(), 3);
/// assert!(g.is_clique(&[0, 1, 2]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Adjacency", into = "Adjacency")
)]
pub struct Graph {
    adj: Adjacency,
}

impl Graph {
    // ---- Constructors ----

    /// Empty graph (no vertices).
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `n` isolated vertices `0..n`.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adj: (0..n).map(|v| (v, BTreeSet::new())).collect(),
        }
    }

    /// Builds a graph on vertices `0..n` from an undirected edge list.
    ///
    /// Duplicate edges are merged. Self-loops and out-of-range endpoints are
    /// rejected.
    pub fn from_edge_list(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Builds a graph from an adjacency map, validating every invariant.
    pub fn from_adjacency(adj: Adjacency) -> Result<Self> {
        for (&u, neighbors) in &adj {
            for &v in neighbors {
                if u == v {
                    return Err(CliqueError::InvalidGraph(format!("self-loop on vertex {u}")));
                }
                match adj.get(&v) {
                    None => {
                        return Err(CliqueError::InvalidGraph(format!(
                            "vertex {u} lists unknown neighbour {v}"
                        )))
                    }
                    Some(back) if !back.contains(&u) => {
                        return Err(CliqueError::InvalidGraph(format!(
                            "edge {u}-{v} is not symmetric"
                        )))
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(Self { adj })
    }

    /// Parses the DIMACS `.clq` format (`p edge <n> <m>` then `e <u> <v>`,
    /// 1-based). Vertices are renumbered `0..n`.
    pub fn parse_dimacs<R: Read>(reader: R) -> Result<Self> {
        let mut graph: Option<Graph> = None;

        for (lineno, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "p" => {
                    if graph.is_some() {
                        return Err(CliqueError::Parse(format!(
                            "line {}: duplicate problem line",
                            lineno + 1
                        )));
                    }
                    let n = parts
                        .get(2)
                        .and_then(|s| s.parse::<usize>().ok())
                        .ok_or_else(|| {
                            CliqueError::Parse(format!("line {}: malformed problem line", lineno + 1))
                        })?;
                    graph = Some(Graph::with_vertices(n));
                }
                "e" => {
                    let g = graph.as_mut().ok_or_else(|| {
                        CliqueError::Parse(format!("line {}: edge before problem line", lineno + 1))
                    })?;
                    let endpoint = |idx: usize| -> Result<VertexId> {
                        parts
                            .get(idx)
                            .and_then(|s| s.parse::<usize>().ok())
                            .filter(|&v| v >= 1)
                            .map(|v| v - 1)
                            .ok_or_else(|| {
                                CliqueError::Parse(format!("line {}: malformed edge", lineno + 1))
                            })
                    };
                    let (u, v) = (endpoint(1)?, endpoint(2)?);
                    g.add_edge(u, v)?;
                }
                other => {
                    return Err(CliqueError::Parse(format!(
                        "line {}: unknown record type '{other}'",
                        lineno + 1
                    )))
                }
            }
        }

        Ok(graph.unwrap_or_default())
    }

    // ---- Mutators ----

    /// Adds an isolated vertex (no-op if present).
    pub fn add_vertex(&mut self, v: VertexId) {
        self.adj.entry(v).or_default();
    }

    /// Adds the undirected edge `u-v`. Both endpoints must exist.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        if u == v {
            return Err(CliqueError::InvalidGraph(format!("self-loop on vertex {u}")));
        }
        if !self.contains(u) || !self.contains(v) {
            return Err(CliqueError::InvalidGraph(format!(
                "edge {u}-{v} references an unknown vertex"
            )));
        }
        self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
        Ok(())
    }

    /// Removes a vertex and every incident edge. Returns whether it existed.
    pub fn remove_vertex(&mut self, v: VertexId) -> bool {
        match self.adj.remove(&v) {
            None => false,
            Some(neighbors) => {
                for u in neighbors {
                    if let Some(back) = self.adj.get_mut(&u) {
                        back.remove(&v);
                    }
                }
                true
            }
        }
    }

    // ---- Queries ----

    /// Number of vertices.
    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges (each counted once).
    pub fn m(&self) -> usize {
        self.adj.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Whether the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adj.keys().copied()
    }

    /// Whether `v` is a vertex of the graph.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.adj.contains_key(&v)
    }

    /// Neighbour set of `v` (empty for unknown vertices).
    pub fn neighbors(&self, v: VertexId) -> &BTreeSet<VertexId> {
        static EMPTY: BTreeSet<VertexId> = BTreeSet::new();
        self.adj.get(&v).unwrap_or(&EMPTY)
    }

    /// Degree of `v` (0 for unknown vertices).
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// Whether the edge `u-v` exists.
    #[inline]
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Whether `v` is adjacent to every vertex in `members`.
    ///
    /// A vertex contained in `members` is never adjacent to itself, so this
    /// is false whenever `v` is already a member.
    pub fn is_adjacent_to_all<'a, I>(&self, v: VertexId, members: I) -> bool
    where
        I: IntoIterator<Item = &'a VertexId>,
    {
        let neighbors = self.neighbors(v);
        members.into_iter().all(|u| neighbors.contains(u))
    }

    /// Whether `vertices` are pairwise adjacent. Empty and singleton sets
    /// of known vertices are cliques.
    pub fn is_clique<'a, I>(&self, vertices: I) -> bool
    where
        I: IntoIterator<Item = &'a VertexId>,
    {
        let list: Vec<VertexId> = vertices.into_iter().copied().collect();
        for (i, &u) in list.iter().enumerate() {
            if !self.contains(u) {
                return false;
            }
            if !self.is_adjacent_to_all(u, &list[i + 1..]) {
                return false;
            }
        }
        true
    }

    /// Vertices sorted by descending degree; ties keep ascending id order.
    pub fn vertices_by_degree_desc(&self) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = self.vertices().collect();
        order.sort_by(|&a, &b| self.degree(b).cmp(&self.degree(a)));
        order
    }

    /// All edges as `(u, v)` with `u < v`.
    pub fn edge_list(&self) -> Vec<(VertexId, VertexId)> {
        self.adj
            .iter()
            .flat_map(|(&u, ns)| ns.range(u + 1..).map(move |&v| (u, v)))
            .collect()
    }

    /// Subgraph induced by `vertices` (unknown ids are ignored).
    pub fn induced_subgraph(&self, vertices: &BTreeSet<VertexId>) -> Graph {
        let adj = vertices
            .iter()
            .filter_map(|&v| {
                self.adj
                    .get(&v)
                    .map(|ns| (v, ns.intersection(vertices).copied().collect()))
            })
            .collect();
        Graph { adj }
    }

    /// Connected components via iterative depth-first traversal.
    ///
    /// Components are listed in order of their smallest vertex.
    pub fn connected_components(&self) -> Vec<BTreeSet<VertexId>> {
        let mut visited: BTreeSet<VertexId> = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.vertices() {
            if visited.contains(&start) {
                continue;
            }
            let mut component = BTreeSet::new();
            let mut stack = vec![start];
            while let Some(current) = stack.pop() {
                if !visited.insert(current) {
                    continue;
                }
                component.insert(current);
                stack.extend(self.neighbors(current).iter().filter(|u| !visited.contains(u)));
            }
            components.push(component);
        }

        components
    }

    /// Borrow the raw adjacency map.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adj
    }
}

impl TryFrom<Adjacency> for Graph {
    type Error = CliqueError;

    fn try_from(adj: Adjacency) -> Result<Self> {
        Graph::from_adjacency(adj)
    }
}

impl From<Graph> for Adjacency {
    fn from(g: Graph) -> Self {
        g.adj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(entries: &[(VertexId, &[VertexId])]) -> Adjacency {
        entries
            .iter()
            .map(|&(v, ns)| (v, ns.iter().copied().collect()))
            .collect()
    }

    // ---- Construction ----

    #[test]
    fn test_triangle() {
        let g = Graph::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert_eq!(g.edge_list(), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(g.degree(0), 2);
    }

    #[test]
    fn test_duplicate_edges_merged() {
        let g = Graph::from_edge_list(2, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(g.m(), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = Graph::from_edge_list(3, &[(1, 1)]).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidGraph(_)));
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let err = Graph::from_edge_list(3, &[(0, 5)]).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidGraph(_)));
    }

    #[test]
    fn test_from_adjacency_valid_sparse_ids() {
        let g = Graph::from_adjacency(adjacency(&[(10, &[42]), (42, &[10]), (7, &[])])).unwrap();
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![7, 10, 42]);
        assert!(g.has_edge(42, 10));
    }

    #[test]
    fn test_from_adjacency_asymmetric() {
        let err = Graph::from_adjacency(adjacency(&[(0, &[1]), (1, &[])])).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidGraph(_)));
    }

    #[test]
    fn test_from_adjacency_self_loop() {
        let err = Graph::from_adjacency(adjacency(&[(0, &[0])])).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidGraph(_)));
    }

    #[test]
    fn test_from_adjacency_dangling() {
        let err = Graph::from_adjacency(adjacency(&[(0, &[9])])).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidGraph(_)));
    }

    // ---- Queries ----

    #[test]
    fn test_is_clique() {
        let g = Graph::from_edge_list(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
        assert!(g.is_clique(&[0, 1, 2]));
        assert!(!g.is_clique(&[0, 1, 3]));
        assert!(g.is_clique(&[3]));
        assert!(g.is_clique(&Vec::<VertexId>::new()));
        assert!(!g.is_clique(&[99]));
    }

    #[test]
    fn test_adjacent_to_all_excludes_members() {
        let g = Graph::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]).unwrap();
        assert!(g.is_adjacent_to_all(2, &[0, 1]));
        assert!(!g.is_adjacent_to_all(1, &[0, 1]));
    }

    #[test]
    fn test_degree_order_stable() {
        let g = Graph::from_edge_list(5, &[(3, 4), (1, 4), (0, 2)]).unwrap();
        // degrees: 0:1 1:1 2:1 3:1 4:2
        assert_eq!(g.vertices_by_degree_desc(), vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_vertex() {
        let mut g = Graph::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]).unwrap();
        assert!(g.remove_vertex(1));
        assert!(!g.remove_vertex(1));
        assert_eq!(g.n(), 2);
        assert_eq!(g.m(), 1);
        assert!(!g.neighbors(0).contains(&1));
    }

    #[test]
    fn test_induced_subgraph() {
        let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        let keep: BTreeSet<VertexId> = [0, 1, 2].into_iter().collect();
        let sub = g.induced_subgraph(&keep);
        assert_eq!(sub.n(), 3);
        assert_eq!(sub.edge_list(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_connected_components() {
        let g = Graph::from_edge_list(7, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        let comps = g.connected_components();
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[0], [0, 1, 2].into_iter().collect());
        assert_eq!(comps[1], [3, 4, 5].into_iter().collect());
        assert_eq!(comps[2], [6].into_iter().collect());
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.m(), 0);
        assert!(g.connected_components().is_empty());
    }

    // ---- DIMACS ----

    #[test]
    fn test_parse_dimacs() {
        let text = "c tiny\np edge 4 3\ne 1 2\ne 2 3\ne 1 3\n";
        let g = Graph::parse_dimacs(text.as_bytes()).unwrap();
        assert_eq!(g.n(), 4);
        assert_eq!(g.m(), 3);
        assert!(g.is_clique(&[0, 1, 2]));
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn test_parse_dimacs_edge_before_header() {
        let err = Graph::parse_dimacs("e 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CliqueError::Parse(_)));
    }

    #[test]
    fn test_parse_dimacs_out_of_range() {
        let err = Graph::parse_dimacs("p edge 2 1\ne 1 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidGraph(_)));
    }

    #[test]
    fn test_parse_dimacs_duplicate_header() {
        let err = Graph::parse_dimacs("p edge 3 1\ne 1 2\np edge 3 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CliqueError::Parse(_)));
    }

    #[test]
    fn test_parse_dimacs_unknown_record() {
        let err = Graph::parse_dimacs("p edge 2 1\nx 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CliqueError::Parse(_)));
    }
}

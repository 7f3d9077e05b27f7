//! Bitmask dynamic programming over all vertex subsets.
//!
//! `dp[mask]` is true iff the vertices encoded by `mask` form a clique.
//! Singletons are cliques; a clique `mask` extends to `mask | 1 << i`
//! whenever `(mask & adj[i]) == mask`. Since `mask | 1 << i > mask`, a
//! single ascending pass over all `2^n` masks settles every entry.
//!
//! Work is `Θ(n · 2^n)` and memory `Θ(2^n)`, so the solver refuses inputs
//! above a configured vertex ceiling instead of allocating.

use crate::error::{CliqueError, Result};
use crate::graph::{Clique, Graph, VertexId};
use crate::solver::CliqueSolver;

/// Largest vertex count the solver can ever accept.
pub const MAX_SUPPORTED_VERTICES: usize = 30;

/// Configuration for [`BitmaskDp`].
///
/// # Examples
///
/// ```
/// use u_clique::exact::BitmaskDpConfig;
///
/// let config = BitmaskDpConfig::default().with_max_vertices(16);
/// assert_eq!(config.max_vertices, 16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitmaskDpConfig {
    /// Vertex ceiling. Inputs above it are rejected with
    /// [`CliqueError::ResourceExceeded`].
    pub max_vertices: usize,
}

impl Default for BitmaskDpConfig {
    fn default() -> Self {
        Self { max_vertices: 22 }
    }
}

impl BitmaskDpConfig {
    /// Sets the vertex ceiling.
    pub fn with_max_vertices(mut self, n: usize) -> Self {
        self.max_vertices = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_vertices > MAX_SUPPORTED_VERTICES {
            return Err(format!(
                "max_vertices must be at most {MAX_SUPPORTED_VERTICES}"
            ));
        }
        Ok(())
    }
}

/// Bitmask DP maximum clique solver.
#[derive(Debug, Clone)]
pub struct BitmaskDp {
    /// Dense index → vertex id.
    vertices: Vec<VertexId>,
    /// Adjacency bitmask per dense index.
    adj: Vec<u32>,
}

impl BitmaskDp {
    /// Creates a solver with the default vertex ceiling.
    pub fn new(graph: &Graph) -> Result<Self> {
        Self::with_config(graph, &BitmaskDpConfig::default())
    }

    /// Creates a solver, rejecting graphs above `config.max_vertices`.
    pub fn with_config(graph: &Graph, config: &BitmaskDpConfig) -> Result<Self> {
        config.validate().map_err(CliqueError::InvalidConfig)?;
        if graph.n() > config.max_vertices {
            return Err(CliqueError::ResourceExceeded {
                vertices: graph.n(),
                limit: config.max_vertices,
            });
        }

        let vertices: Vec<VertexId> = graph.vertices().collect();
        let adj = vertices
            .iter()
            .map(|&v| {
                vertices
                    .iter()
                    .enumerate()
                    .filter(|&(_, &u)| graph.has_edge(v, u))
                    .fold(0u32, |mask, (j, _)| mask | (1 << j))
            })
            .collect();

        Ok(Self { vertices, adj })
    }

    fn max_clique_mask(&self) -> u32 {
        let n = self.vertices.len();
        let total = 1usize << n;
        let mut is_clique = vec![false; total];
        let mut size = vec![0u8; total];

        for i in 0..n {
            is_clique[1 << i] = true;
            size[1 << i] = 1;
        }

        let mut best_mask = 0u32;
        let mut best_size = 0u8;
        for m in 0..total {
            if !is_clique[m] {
                continue;
            }
            let mask = m as u32;
            if size[m] > best_size {
                best_size = size[m];
                best_mask = mask;
            }
            for i in 0..n {
                let bit = 1u32 << i;
                if mask & bit != 0 {
                    continue;
                }
                if mask & self.adj[i] == mask {
                    let next = (mask | bit) as usize;
                    is_clique[next] = true;
                    size[next] = size[m] + 1;
                }
            }
        }

        best_mask
    }
}

impl CliqueSolver for BitmaskDp {
    fn name(&self) -> &'static str {
        "bitmask_dp"
    }

    fn solve(&self) -> Clique {
        if self.vertices.is_empty() {
            return Clique::new();
        }
        let mask = self.max_clique_mask();
        self.vertices
            .iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_triangle() {
        let g = Graph::from_edge_list(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let solver = BitmaskDp::new(&g).unwrap();
        assert_eq!(solver.solve(), [0, 1, 2].into_iter().collect());
    }

    #[test]
    fn test_sparse_ids_use_dense_index() {
        let mut adj = BTreeMap::new();
        adj.insert(100, [200, 300].into_iter().collect());
        adj.insert(200, [100, 300].into_iter().collect());
        adj.insert(300, [100, 200].into_iter().collect());
        adj.insert(5, Default::default());
        let g = Graph::from_adjacency(adj).unwrap();
        let clique = BitmaskDp::new(&g).unwrap().solve();
        assert_eq!(clique, [100, 200, 300].into_iter().collect());
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::with_vertices(5);
        assert_eq!(BitmaskDp::new(&g).unwrap().solve().len(), 1);
    }

    #[test]
    fn test_empty_graph() {
        assert!(BitmaskDp::new(&Graph::new()).unwrap().solve().is_empty());
    }

    #[test]
    fn test_k4_with_tail() {
        let g = Graph::from_edge_list(
            6,
            &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4), (4, 5), (0, 5)],
        )
        .unwrap();
        let clique = BitmaskDp::new(&g).unwrap().solve();
        assert_eq!(clique, [1, 2, 3, 4].into_iter().collect());
    }

    // ---- Resource ceiling ----

    #[test]
    fn test_rejects_above_ceiling() {
        let g = Graph::with_vertices(23);
        let err = BitmaskDp::new(&g).unwrap_err();
        assert!(matches!(
            err,
            CliqueError::ResourceExceeded {
                vertices: 23,
                limit: 22
            }
        ));
    }

    #[test]
    fn test_custom_ceiling() {
        let g = Graph::with_vertices(10);
        let config = BitmaskDpConfig::default().with_max_vertices(8);
        assert!(BitmaskDp::with_config(&g, &config).is_err());
        let config = config.with_max_vertices(10);
        assert!(BitmaskDp::with_config(&g, &config).is_ok());
    }

    #[test]
    fn test_ceiling_above_supported_is_invalid() {
        let config = BitmaskDpConfig::default().with_max_vertices(31);
        assert!(config.validate().is_err());
        let err = BitmaskDp::with_config(&Graph::new(), &config).unwrap_err();
        assert!(matches!(err, CliqueError::InvalidConfig(_)));
    }
}

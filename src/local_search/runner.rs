//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Seed with a greedy-with-restarts clique
//! 2. At each iteration:
//!    a. Add the first non-member adjacent to the whole clique, if any
//!    b. Otherwise try a 2-for-2 swap, accepted only if it yields a
//!       strictly larger valid clique
//!    c. Stop when neither move applies
//! 3. Terminate after `max_iterations`; return the best clique seen

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::config::LocalSearchConfig;
use crate::error::{CliqueError, Result};
use crate::graph::{Clique, Graph, VertexId};
use crate::greedy::{GreedyRestarts, GreedyRestartsConfig};
use crate::random::rng_from_seed;
use crate::solver::CliqueSolver;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult {
    /// Best clique seen.
    pub best: Clique,
    /// Size of the seeding clique.
    pub initial_size: usize,
    /// Iterations executed.
    pub iterations: usize,
    /// Number of accepted single-vertex additions.
    pub additions: usize,
    /// Number of accepted swaps.
    pub swaps: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
    /// Best size after each iteration (the seed size first).
    pub size_history: Vec<usize>,
}

/// Add / 2-swap local search seeded by greedy restarts.
#[derive(Debug, Clone)]
pub struct LocalSearch {
    graph: Graph,
    config: LocalSearchConfig,
    seeder: GreedyRestarts,
}

impl LocalSearch {
    /// Creates a solver with the default configuration (unseeded).
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
            config: LocalSearchConfig::default(),
            seeder: GreedyRestarts::new(graph),
        }
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(graph: &Graph, config: LocalSearchConfig) -> Result<Self> {
        config.validate().map_err(CliqueError::InvalidConfig)?;
        let seeder = GreedyRestarts::with_config(
            graph,
            GreedyRestartsConfig::default().with_num_restarts(config.num_restarts),
        )?;
        Ok(Self {
            graph: graph.clone(),
            config,
            seeder,
        })
    }

    /// Seeds and improves using the configured seed.
    pub fn run(&self) -> LocalSearchResult {
        self.run_with_cancel(None)
    }

    /// Runs with an optional cancellation token, checked every iteration.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> LocalSearchResult {
        let mut rng = rng_from_seed(self.config.seed);
        let initial = self.seeder.construct_with_rng(&mut rng);
        self.search(initial, cancel.as_deref())
    }

    /// Seeds from `rng` and improves.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> LocalSearchResult {
        let initial = self.seeder.construct_with_rng(rng);
        self.search(initial, None)
    }

    /// Improves a caller-supplied starting clique.
    ///
    /// # Errors
    ///
    /// [`CliqueError::InvalidGraph`] when `initial` is not a clique of this
    /// solver's graph.
    pub fn improve(&self, initial: &Clique) -> Result<LocalSearchResult> {
        if !self.graph.is_clique(initial) {
            return Err(CliqueError::InvalidGraph(format!(
                "starting set {initial:?} is not a clique"
            )));
        }
        Ok(self.search(initial.clone(), None))
    }

    fn search(&self, initial: Clique, cancel: Option<&AtomicBool>) -> LocalSearchResult {
        let vertices: Vec<VertexId> = self.graph.vertices().collect();
        let initial_size = initial.len();
        let mut current = initial;
        let mut best = current.clone();

        let mut size_history = Vec::with_capacity(self.config.max_iterations + 1);
        size_history.push(best.len());

        let mut iterations = 0;
        let mut additions = 0;
        let mut swaps = 0;
        let mut cancelled = false;

        for _ in 0..self.config.max_iterations {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            iterations += 1;

            if let Some(v) = self.first_extension(&vertices, &current) {
                current.insert(v);
                additions += 1;
            } else if let Some(next) = self.first_swap(&vertices, &current) {
                current = next;
                swaps += 1;
            } else {
                size_history.push(best.len());
                break;
            }

            if current.len() > best.len() {
                best = current.clone();
            }
            size_history.push(best.len());
        }

        LocalSearchResult {
            best,
            initial_size,
            iterations,
            additions,
            swaps,
            cancelled,
            size_history,
        }
    }

    /// First non-member (ascending id) adjacent to every member.
    fn first_extension(&self, vertices: &[VertexId], current: &Clique) -> Option<VertexId> {
        vertices
            .iter()
            .copied()
            .find(|v| !current.contains(v) && self.graph.is_adjacent_to_all(*v, current))
    }

    /// For each member pair `v1 < v2`, collects non-members adjacent to every
    /// other member and substitutes the first two of them. Only a strictly
    /// larger valid clique is returned.
    fn first_swap(&self, vertices: &[VertexId], current: &Clique) -> Option<Clique> {
        if current.len() < 2 {
            return None;
        }
        let members: Vec<VertexId> = current.iter().copied().collect();

        for (i, &v1) in members.iter().enumerate() {
            for &v2 in &members[i + 1..] {
                let rest: Vec<VertexId> = members
                    .iter()
                    .copied()
                    .filter(|&u| u != v1 && u != v2)
                    .collect();
                let replacements: Vec<VertexId> = vertices
                    .iter()
                    .copied()
                    .filter(|v| !current.contains(v) && self.graph.is_adjacent_to_all(*v, &rest))
                    .take(2)
                    .collect();
                if replacements.len() < 2 {
                    continue;
                }

                let candidate: Clique = rest.iter().chain(&replacements).copied().collect();
                if candidate.len() > current.len() && self.graph.is_clique(&candidate) {
                    return Some(candidate);
                }
            }
        }

        None
    }
}

impl CliqueSolver for LocalSearch {
    fn name(&self) -> &'static str {
        "local_search"
    }

    fn solve(&self) -> Clique {
        self.run().best
    }
}

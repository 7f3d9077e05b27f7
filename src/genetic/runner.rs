//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] runs: initialization → evaluation → truncation →
//! crossover → mutation → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::seq::index;
use rand::Rng;

use super::config::GeneticConfig;
use super::operators::{crossover, mutate, random_clique};
use super::types::CliqueIndividual;
use crate::error::{CliqueError, Result};
use crate::graph::{Clique, Graph, VertexId};
use crate::random::rng_from_seed;
use crate::solver::CliqueSolver;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// The fittest individual of the final population.
    pub best: Clique,

    /// Fitness of `best` (its size).
    pub best_fitness: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of the initial population, then after each generation.
    pub fitness_history: Vec<usize>,
}

/// Elitist genetic algorithm over cliques.
///
/// # Usage
///
/// ```
/// use u_clique::genetic::{GeneticAlgorithm, GeneticConfig};
/// use u_clique::Graph;
///
/// let g = Graph::from_edge_list(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
/// let ga = GeneticAlgorithm::with_config(&g, GeneticConfig::default().with_seed(42)).unwrap();
/// let result = ga.run();
/// assert_eq!(result.best_fitness, 3);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    graph: Graph,
    config: GeneticConfig,
    vertices: Vec<VertexId>,
}

impl GeneticAlgorithm {
    /// Creates a solver with the default configuration (unseeded).
    pub fn new(graph: &Graph) -> Self {
        Self {
            graph: graph.clone(),
            config: GeneticConfig::default(),
            vertices: graph.vertices().collect(),
        }
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(graph: &Graph, config: GeneticConfig) -> Result<Self> {
        config.validate().map_err(CliqueError::InvalidConfig)?;
        Ok(Self {
            graph: graph.clone(),
            config,
            vertices: graph.vertices().collect(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Runs the GA using the configured seed.
    pub fn run(&self) -> GeneticResult {
        self.run_with_cancel(None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked at the start of every generation; when set, the
    /// current population's fittest individual is returned.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> GeneticResult {
        let mut rng = rng_from_seed(self.config.seed);
        self.evolve(&mut rng, cancel.as_deref())
    }

    /// Runs the GA drawing all randomness from `rng`.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> GeneticResult {
        self.evolve(rng, None)
    }

    fn evolve<R: Rng>(&self, rng: &mut R, cancel: Option<&AtomicBool>) -> GeneticResult {
        if self.graph.is_empty() {
            return GeneticResult {
                best: Clique::new(),
                best_fitness: 0,
                generations: 0,
                stagnated: false,
                cancelled: false,
                fitness_history: vec![0],
            };
        }

        let config = &self.config;
        let survivor_count = config.survivor_count();

        // 1. Initialize and evaluate
        let mut population: Vec<CliqueIndividual> = (0..config.population_size)
            .map(|_| {
                let members = random_clique(&self.graph, &self.vertices, rng);
                CliqueIndividual::evaluated(&self.graph, members)
            })
            .collect();

        let mut best_fitness = fittest(&population).fitness;
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best_fitness);

        let mut generations = 0;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Stable sort keeps earlier individuals first among equals
            population.sort_by(|a, b| b.fitness.cmp(&a.fitness));
            population.truncate(survivor_count);

            while population.len() < config.population_size {
                let parents = index::sample(rng, survivor_count, 2);
                let mut child = crossover(
                    &self.graph,
                    &population[parents.index(0)].members,
                    &population[parents.index(1)].members,
                );
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutate(
                        &self.graph,
                        &mut child,
                        &self.vertices,
                        config.max_mutation_additions,
                        rng,
                    );
                }
                population.push(CliqueIndividual::evaluated(&self.graph, child));
            }
            generations = gen + 1;

            let gen_best = fittest(&population).fitness;
            if gen_best > best_fitness {
                best_fitness = gen_best;
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best_fitness);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        let best = fittest(&population).clone();
        GeneticResult {
            best_fitness: best.fitness,
            best: best.members,
            generations,
            stagnated,
            cancelled,
            fitness_history,
        }
    }
}

impl CliqueSolver for GeneticAlgorithm {
    fn name(&self) -> &'static str {
        "genetic"
    }

    fn solve(&self) -> Clique {
        self.run().best
    }
}

/// First individual with maximal fitness.
///
/// `population` is never empty: validation guarantees at least two members.
fn fittest(population: &[CliqueIndividual]) -> &CliqueIndividual {
    static EMPTY: CliqueIndividual = CliqueIndividual {
        members: Clique::new(),
        fitness: 0,
    };
    population
        .iter()
        .reduce(|best, ind| if ind.fitness > best.fitness { ind } else { best })
        .unwrap_or(&EMPTY)
}

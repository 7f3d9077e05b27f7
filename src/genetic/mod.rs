//! Genetic Algorithm for maximum clique.
//!
//! A population of cliques evolves by truncation selection, union crossover
//! with greedy repair, and random-addition mutation. All operators keep
//! individuals valid, so fitness is simply clique size.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: Algorithm parameters
//! - [`GeneticAlgorithm`]: Executes the evolutionary loop
//! - [`GeneticResult`]: Final result with per-generation statistics
//!
//! # References
//!
//! - Marchiori (1998), "A simple heuristic based genetic algorithm for the
//!   maximum clique problem"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod types;

pub use config::GeneticConfig;
pub use runner::{GeneticAlgorithm, GeneticResult};
pub use types::{fitness, CliqueIndividual};

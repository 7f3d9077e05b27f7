//! GA configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the clique Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_clique::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// assert!((config.mutation_rate - 0.1).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_clique::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(80)
///     .with_generations(200)
///     .with_mutation_rate(0.25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the sorted population kept as survivors (0.0–1.0).
    ///
    /// Survivors pass unchanged to the next generation and are the only
    /// parents. Must leave at least two survivors and at least one
    /// offspring slot.
    pub survivor_ratio: f64,

    /// Maximum number of random non-members a mutation tries to add.
    pub max_mutation_additions: usize,

    /// Generations without a fitter best before stopping early.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            survivor_ratio: 0.5,
            max_mutation_additions: 3,
            stagnation_limit: 0,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the survivor ratio.
    pub fn with_survivor_ratio(mut self, ratio: f64) -> Self {
        self.survivor_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum additions per mutation.
    pub fn with_max_mutation_additions(mut self, n: usize) -> Self {
        self.max_mutation_additions = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of survivors kept each generation.
    pub fn survivor_count(&self) -> usize {
        (self.population_size as f64 * self.survivor_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if self.survivor_count() < 2 {
            return Err("survivor_ratio too low: fewer than two parents survive".into());
        }
        if self.survivor_count() >= self.population_size {
            return Err("survivor_ratio too high: no room for offspring".into());
        }
        Ok(())
    }
}

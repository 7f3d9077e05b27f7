//! Local search configuration.

/// Configuration parameters for [`LocalSearch`](super::LocalSearch).
///
/// # Examples
///
/// ```
/// use u_clique::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(200)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.num_restarts, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Maximum number of improvement iterations.
    pub max_iterations: usize,
    /// Restarts used by the greedy construction that seeds the search.
    pub num_restarts: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            num_restarts: 10,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of restarts for the seeding construction.
    pub fn with_num_restarts(mut self, n: usize) -> Self {
        self.num_restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_restarts == 0 {
            return Err("num_restarts must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.num_restarts, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_restarts_invalid() {
        assert!(LocalSearchConfig::default()
            .with_num_restarts(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_iterations_allowed() {
        // the seeding construction alone is returned
        assert!(LocalSearchConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_ok());
    }
}

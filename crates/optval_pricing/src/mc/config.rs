//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Least-squares Monte Carlo configuration.
///
/// Immutable simulation parameters; construct through
/// [`LsmConfigBuilder`]. The optional seed makes repeated pricing calls
/// bit-reproducible; without one, each call draws a fresh entropy seed.
///
/// # Examples
///
/// ```rust
/// use optval_pricing::mc::LsmConfig;
///
/// let config = LsmConfig::builder()
///     .n_paths(10_000)
///     .n_steps(100)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LsmConfig {
    /// Number of simulated trajectories.
    n_paths: usize,
    /// Number of time steps per trajectory.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl LsmConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> LsmConfigBuilder {
        LsmConfigBuilder::default()
    }

    /// Returns the number of simulated trajectories.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per trajectory.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` or `n_steps` is zero or above
    /// its maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        Ok(())
    }
}

/// Builder for [`LsmConfig`].
///
/// Validates at build time so an `LsmConfig` in hand is always usable.
#[derive(Clone, Debug, Default)]
pub struct LsmConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl LsmConfigBuilder {
    /// Sets the number of simulated trajectories (in [1, 10_000_000]).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per trajectory (in [1, 10_000]).
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required parameter is missing or out of
    /// range.
    pub fn build(self) -> Result<LsmConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::MissingParameter("n_paths"))?;
        let n_steps = self.n_steps.ok_or(ConfigError::MissingParameter("n_steps"))?;

        let config = LsmConfig {
            n_paths,
            n_steps,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

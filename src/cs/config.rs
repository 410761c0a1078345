//! Cuckoo Search configuration.

/// How the search treats [`Problem::is_feasible`](crate::Problem::is_feasible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeasibilityPolicy {
    /// Compare raw fitness only.
    ///
    /// Infeasibility matters only through whatever penalty the problem folds
    /// into its fitness. This is the classic Cuckoo Search behavior.
    #[default]
    FitnessOnly,

    /// Feasible candidates dominate infeasible ones.
    ///
    /// A feasible candidate may replace an infeasible nest regardless of
    /// fitness, an infeasible candidate never replaces a feasible nest, and
    /// candidates of equal feasibility compare by fitness.
    ///
    /// Reference: Deb (2000), "An efficient constraint handling method for
    /// genetic algorithms"
    FeasibleFirst,
}

/// Configuration for the Cuckoo Search algorithm.
///
/// # Examples
///
/// ```
/// use u_cuckoo::cs::{CsConfig, FeasibilityPolicy};
///
/// let config = CsConfig::default()
///     .with_population_size(30)
///     .with_max_iterations(200)
///     .with_abandonment_ratio(0.25)
///     .with_step_size(0.2)
///     .with_feasibility(FeasibilityPolicy::FeasibleFirst)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsConfig {
    /// Number of nests. Constant for the whole run.
    pub population_size: usize,

    /// Fixed iteration budget.
    pub max_iterations: usize,

    /// Fraction of nests abandoned and reseeded per abandonment phase (`p_a`).
    ///
    /// Typical value: 0.25.
    pub abandonment_ratio: f64,

    /// Run the abandonment phase every this many iterations.
    pub abandon_interval: usize,

    /// Scale applied to each Lévy step.
    pub step_size: f64,

    /// Lévy exponent `β` in `(0, 2)`. Smaller values give heavier tails.
    ///
    /// Typical value: 1.5.
    pub levy_beta: f64,

    /// Project perturbed values back into the problem's box constraints.
    ///
    /// Off by default: variables move freely and are only thresholded when
    /// read.
    pub clamp_to_bounds: bool,

    /// How feasibility enters acceptance and best tracking.
    pub feasibility: FeasibilityPolicy,

    /// Keep a copy of the best-so-far solution after every iteration.
    pub record_snapshots: bool,

    /// Evaluate candidates in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are identical
    /// to a serial run with the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for CsConfig {
    fn default() -> Self {
        Self {
            population_size: 25,
            max_iterations: 100,
            abandonment_ratio: 0.25,
            abandon_interval: 1,
            step_size: 0.1,
            levy_beta: 1.5,
            clamp_to_bounds: false,
            feasibility: FeasibilityPolicy::default(),
            record_snapshots: false,
            parallel: false,
            seed: None,
        }
    }
}

impl CsConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the abandonment ratio.
    ///
    /// Not clamped: out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_abandonment_ratio(mut self, ratio: f64) -> Self {
        self.abandonment_ratio = ratio;
        self
    }

    pub fn with_abandon_interval(mut self, n: usize) -> Self {
        self.abandon_interval = n;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_levy_beta(mut self, beta: f64) -> Self {
        self.levy_beta = beta;
        self
    }

    pub fn with_clamp_to_bounds(mut self, clamp: bool) -> Self {
        self.clamp_to_bounds = clamp;
        self
    }

    pub fn with_feasibility(mut self, policy: FeasibilityPolicy) -> Self {
        self.feasibility = policy;
        self
    }

    pub fn with_record_snapshots(mut self, record: bool) -> Self {
        self.record_snapshots = record;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of nests reseeded per abandonment phase.
    ///
    /// # Panics
    /// Panics if `abandonment_ratio` is outside `[0, 1]`.
    pub fn abandon_count(&self) -> usize {
        crate::population::abandon_count(self.abandonment_ratio, self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.abandonment_ratio) {
            return Err(format!(
                "abandonment_ratio must be in [0, 1], got {}",
                self.abandonment_ratio
            ));
        }
        if self.abandon_interval == 0 {
            return Err("abandon_interval must be at least 1".into());
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(format!("step_size must be positive, got {}", self.step_size));
        }
        if !(self.levy_beta > 0.0 && self.levy_beta < 2.0) {
            return Err(format!("levy_beta must be in (0, 2), got {}", self.levy_beta));
        }
        Ok(())
    }
}

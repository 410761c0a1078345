//! The optimization problem capability trait.
//!
//! A [`Problem`] is everything the search engine needs to know about a
//! domain: how many decision variables there are, how to sample a random
//! candidate, how good a candidate is, and whether it satisfies the
//! constraints that simple per-variable bounds cannot express.
//!
//! New problem types are added by implementing the trait. The engine never
//! inspects the domain beyond these methods.

use crate::solution::Solution;
use rand::Rng;

/// A box bound on a single decision variable.
///
/// Binary problems own one `[0, 1]` constraint per variable. Constraints are
/// built once when the problem is constructed and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Index of the constrained variable.
    pub index: usize,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Inclusive upper bound.
    pub upper: f64,
}

impl Constraint {
    /// Creates a bound on variable `index`.
    ///
    /// # Panics
    /// Panics if either bound is not finite or `lower > upper`.
    pub fn new(index: usize, lower: f64, upper: f64) -> Self {
        assert!(
            lower.is_finite() && upper.is_finite() && lower <= upper,
            "invalid bounds [{lower}, {upper}] for variable {index}"
        );
        Self {
            index,
            lower,
            upper,
        }
    }

    /// A `[0, 1]` bound, the shape used by every binary problem.
    pub fn binary(index: usize) -> Self {
        Self::new(index, 0.0, 1.0)
    }

    /// Whether `value` lies within the bound.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Projects `value` onto the bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Draws a value uniformly from the bound.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.lower == self.upper {
            self.lower
        } else {
            rng.random_range(self.lower..self.upper)
        }
    }
}

/// Defines an optimization problem for the Cuckoo Search engine.
///
/// # Maximization
///
/// Fitness is maximized: **higher is better**. Problems that naturally
/// minimize a cost should return its negation.
///
/// # Infeasibility
///
/// Constraint violations may be folded into [`fitness`](Problem::fitness)
/// as a dominating penalty, reported separately by
/// [`is_feasible`](Problem::is_feasible), or both. How the search uses the
/// feasibility predicate is chosen by
/// [`FeasibilityPolicy`](crate::cs::FeasibilityPolicy).
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_cuckoo::{Problem, Solution};
///
/// // Maximize the number of ones in a 16-bit string.
/// struct OneMax;
///
/// impl Problem for OneMax {
///     fn dimensionality(&self) -> usize {
///         16
///     }
///
///     fn fitness(&self, solution: &Solution) -> f64 {
///         solution.as_discrete().iter().map(|&b| b as f64).sum()
///     }
/// }
///
/// let mut rng = u_cuckoo::random::create_rng(1);
/// let s = OneMax.random_solution(&mut rng);
/// assert_eq!(s.len(), 16);
/// ```
pub trait Problem: Send + Sync {
    /// Number of decision variables. Positive and fixed for the problem's life.
    fn dimensionality(&self) -> usize;

    /// Per-variable box bounds. Variables without an entry are unbounded.
    fn constraints(&self) -> &[Constraint] {
        &[]
    }

    /// Samples a random candidate.
    ///
    /// Used both to initialize the population and to reseed abandoned nests.
    /// The default draws each variable independently and uniformly within
    /// its constraint, or from `[0, 1)` when the variable has none.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        let n = self.dimensionality();
        let mut bounds: Vec<Option<Constraint>> = vec![None; n];
        for c in self.constraints() {
            if c.index < n {
                bounds[c.index] = Some(*c);
            }
        }
        let vars = bounds
            .iter()
            .map(|b| match b {
                Some(c) => c.sample(rng),
                None => rng.random_range(0.0..1.0),
            })
            .collect();
        Solution::from_vec(vars)
    }

    /// Scores a candidate. Higher is better.
    ///
    /// Must be a pure function of the solution's current vector contents.
    fn fitness(&self, solution: &Solution) -> f64;

    /// Checks the domain constraints that box bounds cannot express.
    ///
    /// The default accepts every candidate.
    fn is_feasible(&self, _solution: &Solution) -> bool {
        true
    }

    /// Called at the end of each iteration with the best fitness so far.
    ///
    /// The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_fitness: f64) {}
}

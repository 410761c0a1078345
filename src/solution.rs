//! Candidate solutions.
//!
//! A [`Solution`] is a fixed-length vector of real-valued decision variables.
//! The search moves through continuous space, while binary problems read the
//! vector through a 0.5 threshold ([`Solution::as_discrete`]).

use crate::problem::Problem;
use rand::Rng;
use std::hash::{Hash, Hasher};

/// Threshold that separates a 0 from a 1 in the discrete view.
pub const DISCRETE_THRESHOLD: f64 = 0.5;

/// Maps one decision variable to its binary indicator.
///
/// Values below [`DISCRETE_THRESHOLD`] map to 0, everything else
/// (including exactly 0.5) maps to 1.
#[inline]
pub fn threshold(value: f64) -> u8 {
    if value < DISCRETE_THRESHOLD {
        0
    } else {
        1
    }
}

/// A candidate solution: one vector of decision variables.
///
/// The vector's length is fixed at construction; only its contents change.
///
/// # Equality
///
/// Two solutions compare equal when their **discrete views** are equal.
/// Continuous values are not compared, since distinct vectors can encode the
/// same binary assignment.
///
/// ```
/// use u_cuckoo::Solution;
///
/// let a = Solution::from_vec(vec![0.1, 0.9, 0.5]);
/// let b = Solution::from_vec(vec![0.4, 0.6, 0.7]);
/// assert_eq!(a, b);
/// assert_eq!(a.as_discrete(), vec![0, 1, 1]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    vars: Vec<f64>,
}

impl Solution {
    /// Creates an all-zero solution of the given dimensionality.
    ///
    /// # Panics
    /// Panics if `dimensionality` is 0.
    pub fn new(dimensionality: usize) -> Self {
        assert!(dimensionality > 0, "solution dimensionality must be positive");
        Self {
            vars: vec![0.0; dimensionality],
        }
    }

    /// Wraps an existing vector.
    ///
    /// # Panics
    /// Panics if `vars` is empty.
    pub fn from_vec(vars: Vec<f64>) -> Self {
        assert!(!vars.is_empty(), "solution dimensionality must be positive");
        Self { vars }
    }

    /// Read access to the current values.
    pub fn vector(&self) -> &[f64] {
        &self.vars
    }

    /// Write access to the current values. The length cannot change.
    pub fn vector_mut(&mut self) -> &mut [f64] {
        &mut self.vars
    }

    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Always `false`: a solution has at least one variable.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Overwrites one variable.
    pub fn set(&mut self, index: usize, value: f64) {
        self.vars[index] = value;
    }

    /// Overwrites the vector with a fresh sample from `problem`.
    ///
    /// # Panics
    /// Panics if the problem's dimensionality differs from this solution's.
    pub fn set_random<P: Problem, R: Rng>(&mut self, problem: &P, rng: &mut R) {
        let fresh = problem.random_solution(rng);
        assert_eq!(
            fresh.len(),
            self.len(),
            "random solution has {} variables, expected {}",
            fresh.len(),
            self.len()
        );
        self.vars.copy_from_slice(&fresh.vars);
    }

    /// The binary interpretation of the current vector.
    ///
    /// Recomputed from the current contents on every call.
    pub fn as_discrete(&self) -> Vec<u8> {
        self.vars.iter().map(|&v| threshold(v)).collect()
    }

    /// Number of variables whose discrete value is 1.
    pub fn count_ones(&self) -> usize {
        self.vars.iter().filter(|&&v| threshold(v) == 1).count()
    }

    /// Whether both solutions encode the same binary assignment.
    pub fn same_assignment(&self, other: &Solution) -> bool {
        self.len() == other.len()
            && self
                .vars
                .iter()
                .zip(other.vars.iter())
                .all(|(&a, &b)| threshold(a) == threshold(b))
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.same_assignment(other)
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_discrete().hash(state);
    }
}

impl From<Vec<f64>> for Solution {
    fn from(vars: Vec<f64>) -> Self {
        Self::from_vec(vars)
    }
}

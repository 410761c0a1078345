//! The nest pool.
//!
//! A [`Population`] holds a fixed number of [`Solution`]s ("nests"). It
//! supports uniform random selection, replacement by value, transient
//! fitness ranking, and abandonment of the weakest fraction.
//!
//! The population never decides whether a replacement is an improvement;
//! that belongs to the search algorithm.

use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;
use std::cmp::Ordering;

/// A fixed-size collection of nests.
///
/// Slots keep their insertion order. Ranking by fitness produces an index
/// permutation and never reorders the slots themselves.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    nests: Vec<Solution>,
}

impl Population {
    /// Creates `size` all-zero nests of the given dimensionality.
    ///
    /// # Panics
    /// Panics if `size` or `dimensionality` is 0.
    pub fn new(size: usize, dimensionality: usize) -> Self {
        assert!(size > 0, "population size must be positive");
        Self {
            nests: (0..size).map(|_| Solution::new(dimensionality)).collect(),
        }
    }

    /// Creates `size` nests sampled from `problem`.
    pub fn random<P: Problem, R: Rng>(problem: &P, size: usize, rng: &mut R) -> Self {
        let mut population = Self::new(size, problem.dimensionality());
        population.initialize_random(problem, rng);
        population
    }

    /// Number of nests. Constant for the population's life.
    pub fn size(&self) -> usize {
        self.nests.len()
    }

    /// The nest at `index`.
    pub fn get(&self, index: usize) -> &Solution {
        &self.nests[index]
    }

    /// All nests in slot order.
    pub fn solutions(&self) -> &[Solution] {
        &self.nests
    }

    /// Iterates over the nests in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.nests.iter()
    }

    /// Overwrites every nest with a fresh sample from `problem`.
    pub fn initialize_random<P: Problem, R: Rng>(&mut self, problem: &P, rng: &mut R) {
        for nest in &mut self.nests {
            nest.set_random(problem, rng);
        }
    }

    /// A uniformly chosen slot index.
    pub fn random_index<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.nests.len())
    }

    /// A uniformly chosen nest. The nest stays in the population.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> &Solution {
        &self.nests[self.random_index(rng)]
    }

    /// Overwrites the slot at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range or the solution's length differs
    /// from the nest it replaces.
    pub fn replace(&mut self, index: usize, solution: Solution) {
        assert_eq!(
            solution.len(),
            self.nests[index].len(),
            "replacement for nest {index} has the wrong dimensionality"
        );
        self.nests[index] = solution;
    }

    /// Slot indices ordered by ascending fitness: least fit first.
    ///
    /// The sort is stable, so tied nests keep their slot order.
    pub fn ranking<P: Problem>(&self, problem: &P) -> Vec<usize> {
        let fitness: Vec<f64> = self.nests.iter().map(|s| problem.fitness(s)).collect();
        rank_ascending(&fitness)
    }

    /// Index of the fittest nest. Ties resolve to the lowest slot index.
    pub fn best_index<P: Problem>(&self, problem: &P) -> usize {
        let mut best = 0;
        let mut best_fitness = problem.fitness(&self.nests[0]);
        for (i, nest) in self.nests.iter().enumerate().skip(1) {
            let f = problem.fitness(nest);
            if f.total_cmp(&best_fitness) == Ordering::Greater {
                best = i;
                best_fitness = f;
            }
        }
        best
    }

    /// Reseeds the `floor(ratio × size)` least fit nests.
    ///
    /// Nests are ranked by ascending fitness (stable on ties) and the first
    /// `floor(ratio × size)` of that ranking are overwritten with fresh
    /// samples from `problem`. Returns the reseeded slot indices in rank
    /// order.
    ///
    /// # Panics
    /// Panics if `ratio` is outside `[0, 1]` or NaN.
    pub fn abandon_worst<P: Problem, R: Rng>(
        &mut self,
        problem: &P,
        ratio: f64,
        rng: &mut R,
    ) -> Vec<usize> {
        let ranking = self.ranking(problem);
        self.abandon_ranked(problem, &ranking, ratio, rng)
    }

    /// Reseeds the first `floor(ratio × size)` slots of a precomputed
    /// least-fit-first `ranking`.
    pub(crate) fn abandon_ranked<P: Problem, R: Rng>(
        &mut self,
        problem: &P,
        ranking: &[usize],
        ratio: f64,
        rng: &mut R,
    ) -> Vec<usize> {
        let count = abandon_count(ratio, self.nests.len());
        let abandoned = ranking[..count].to_vec();
        for &i in &abandoned {
            self.nests[i].set_random(problem, rng);
        }
        abandoned
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Solution;

    fn index(&self, index: usize) -> &Solution {
        &self.nests[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.nests.iter()
    }
}

/// Number of nests abandoned for `ratio` on a population of `size`.
///
/// # Panics
/// Panics if `ratio` is outside `[0, 1]` or NaN.
pub fn abandon_count(ratio: f64, size: usize) -> usize {
    assert!(
        (0.0..=1.0).contains(&ratio),
        "abandonment ratio must be in [0, 1], got {ratio}"
    );
    ((ratio * size as f64).floor() as usize).min(size)
}

/// Stable ascending argsort over fitness values.
pub(crate) fn rank_ascending(fitness: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));
    order
}

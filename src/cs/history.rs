//! Best-so-far snapshot history.
//!
//! A run that records snapshots keeps one best-so-far solution per
//! iteration. [`best_changes`] collapses consecutive snapshots that encode
//! the same assignment into a single entry, counting how many iterations
//! the assignment survived unchanged. That count is a simple convergence
//! signal.

use crate::solution::Solution;

/// One distinct best solution and how long it stayed best.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestChange {
    /// The best solution at the end of the run of equal snapshots.
    pub solution: Solution,
    /// Its fitness.
    pub fitness: f64,
    /// Snapshot index at which this assignment first became best
    /// (0 = initial population).
    pub first_iteration: usize,
    /// Consecutive later snapshots with the same assignment.
    pub stable_iterations: usize,
}

/// Groups consecutive equal snapshots (by discrete view).
///
/// `fitness[i]` must be the fitness of `snapshots[i]`.
///
/// # Panics
/// Panics if the two slices have different lengths while `snapshots` is
/// non-empty.
pub fn best_changes(snapshots: &[Solution], fitness: &[f64]) -> Vec<BestChange> {
    if snapshots.is_empty() {
        return Vec::new();
    }
    assert_eq!(
        snapshots.len(),
        fitness.len(),
        "every snapshot needs a fitness value"
    );

    let mut changes = Vec::new();
    let mut start = 0;
    for i in 1..=snapshots.len() {
        if i == snapshots.len() || snapshots[i] != snapshots[i - 1] {
            changes.push(BestChange {
                solution: snapshots[i - 1].clone(),
                fitness: fitness[i - 1],
                first_iteration: start,
                stable_iterations: i - 1 - start,
            });
            start = i;
        }
    }
    changes
}

//! The nurse scheduling problem.

use super::params::ScheduleParams;
use crate::error::ConfigError;
use crate::problem::{Constraint, Problem};
use crate::solution::{threshold, Solution};

/// Assigns employees to the time slots of a repeating cycle.
///
/// Variables are laid out employee-major: variable
/// `e × schedule_len + d × num_shifts + s` says whether employee `e` works
/// shift `s` of day `d`. Every variable is bounded to `[0, 1]` and read
/// through the 0.5 threshold.
///
/// # Fitness
///
/// `fitness = −(preference_score + consecutive_penalty)`
///
/// - `preference_score` sums the preference weight of every worked slot.
///   Weights are costs: 1 marks the most wanted slot.
/// - `consecutive_penalty` is `(num_employees × schedule_len)³` when any
///   employee works more than `max_shifts_in_row` consecutive slots,
///   counting wraparound from the end of the cycle to its start. It is
///   applied once, however many violations there are, and outweighs any
///   achievable preference score.
///
/// Coverage is not part of the fitness. It is reported by
/// [`is_feasible`](Problem::is_feasible).
#[derive(Debug, Clone)]
pub struct NurseScheduling {
    params: ScheduleParams,
    shift_reqs: Vec<Vec<i64>>,
    preferences: Vec<Vec<i64>>,
    /// `shift_reqs` flattened to one entry per slot.
    coverage_reqs: Vec<i64>,
    constraints: Vec<Constraint>,
}

impl NurseScheduling {
    /// Builds and validates an instance.
    ///
    /// - `shift_reqs` is `[num_days][num_shifts]`: employees required per
    ///   slot. The last shift of every day must require 0.
    /// - `preferences` is `[num_employees][num_days × num_shifts]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending parameter.
    pub fn new(
        params: ScheduleParams,
        shift_reqs: Vec<Vec<i64>>,
        preferences: Vec<Vec<i64>>,
    ) -> Result<Self, ConfigError> {
        if params.num_employees == 0 {
            return Err(ConfigError::NotPositive {
                field: "number of employees",
            });
        }
        if params.num_days == 0 {
            return Err(ConfigError::NotPositive {
                field: "number of days in scheduling cycle",
            });
        }
        if params.num_shifts == 0 {
            return Err(ConfigError::NotPositive {
                field: "number of shifts per day",
            });
        }
        if params.max_shifts_in_row == 0 {
            return Err(ConfigError::NotPositive {
                field: "maximum number of shifts in a row",
            });
        }

        if shift_reqs.len() != params.num_days
            || shift_reqs.iter().any(|day| day.len() != params.num_shifts)
        {
            return Err(ConfigError::Dimension {
                field: "shift requirements",
                expected: "[number of days] by [number of shifts]",
            });
        }
        if shift_reqs
            .iter()
            .any(|day| day[params.num_shifts - 1] != 0)
        {
            return Err(ConfigError::Invalid {
                field: "the last shift",
                problem: "must have a requirement of zero employees",
            });
        }
        if shift_reqs.iter().flatten().any(|&r| r < 0) {
            return Err(ConfigError::Invalid {
                field: "shift requirements",
                problem: "must not be negative",
            });
        }

        let len = params.schedule_len();
        if preferences.len() != params.num_employees
            || preferences.iter().any(|row| row.len() != len)
        {
            return Err(ConfigError::Dimension {
                field: "employee preferences",
                expected: "[number of employees] by [number of days times number of shifts]",
            });
        }

        let coverage_reqs = shift_reqs.iter().flatten().copied().collect();
        let constraints = (0..params.dimensionality())
            .map(Constraint::binary)
            .collect();

        Ok(Self {
            params,
            shift_reqs,
            preferences,
            coverage_reqs,
            constraints,
        })
    }

    /// Scalar shape of the instance.
    pub fn params(&self) -> &ScheduleParams {
        &self.params
    }

    /// Employees required per `[day][shift]`.
    pub fn shift_reqs(&self) -> &[Vec<i64>] {
        &self.shift_reqs
    }

    /// Preference cost per `[employee][slot]`.
    pub fn preferences(&self) -> &[Vec<i64>] {
        &self.preferences
    }

    /// Time slots per cycle.
    pub fn schedule_len(&self) -> usize {
        self.params.schedule_len()
    }

    /// Variable index of employee `employee` on `shift` of `day`.
    pub fn index(&self, employee: usize, day: usize, shift: usize) -> usize {
        employee * self.schedule_len() + day * self.params.num_shifts + shift
    }

    /// The size of the consecutive-shift penalty.
    pub fn penalty_weight(&self) -> f64 {
        ((self.params.num_employees * self.schedule_len()) as f64).powi(3)
    }

    /// One employee's discrete schedule.
    fn schedule<'s>(&self, bits: &'s [u8], employee: usize) -> &'s [u8] {
        let len = self.schedule_len();
        &bits[employee * len..(employee + 1) * len]
    }

    /// Sum of preference weights over all worked slots.
    pub fn preference_score(&self, solution: &Solution) -> f64 {
        let len = self.schedule_len();
        let vars = solution.vector();
        self.preferences
            .iter()
            .enumerate()
            .map(|(e, row)| {
                row.iter()
                    .zip(&vars[e * len..(e + 1) * len])
                    .map(|(&w, &v)| (w * threshold(v) as i64) as f64)
                    .sum::<f64>()
            })
            .sum()
    }

    /// Whether some employee works more than `max_shifts_in_row`
    /// consecutive slots, with wraparound.
    pub fn has_consecutive_violation(&self, solution: &Solution) -> bool {
        let bits = solution.as_discrete();
        let len = self.schedule_len();
        let max = self.params.max_shifts_in_row;

        (0..self.params.num_employees).any(|e| {
            let schedule = self.schedule(&bits, e);
            (0..len).any(|start| {
                (0..=max).all(|k| schedule[(start + k) % len] == 1)
            })
        })
    }

    /// [`penalty_weight`](Self::penalty_weight) if the solution has a
    /// consecutive-shift violation, else 0.
    pub fn consecutive_penalty(&self, solution: &Solution) -> f64 {
        if self.has_consecutive_violation(solution) {
            self.penalty_weight()
        } else {
            0.0
        }
    }

    /// Employees assigned to each slot.
    pub fn coverage(&self, solution: &Solution) -> Vec<i64> {
        let bits = solution.as_discrete();
        let len = self.schedule_len();
        let mut counts = vec![0i64; len];
        for e in 0..self.params.num_employees {
            for (slot, &b) in self.schedule(&bits, e).iter().enumerate() {
                counts[slot] += b as i64;
            }
        }
        counts
    }

    /// Squared deviation from the coverage requirement, summed over slots.
    ///
    /// Over- and under-staffing both count. Not part of the fitness.
    pub fn coverage_deviation(&self, solution: &Solution) -> f64 {
        self.coverage(solution)
            .iter()
            .zip(&self.coverage_reqs)
            .map(|(&have, &need)| ((have - need) as f64).powi(2))
            .sum()
    }

    /// The discrete schedule as text: one line per employee, one 0/1 per slot.
    pub fn format_schedule(&self, solution: &Solution) -> String {
        let bits = solution.as_discrete();
        (0..self.params.num_employees)
            .map(|e| {
                self.schedule(&bits, e)
                    .iter()
                    .map(|b| b.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Problem for NurseScheduling {
    fn dimensionality(&self) -> usize {
        self.params.dimensionality()
    }

    fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn fitness(&self, solution: &Solution) -> f64 {
        -(self.preference_score(solution) + self.consecutive_penalty(solution))
    }

    /// Every slot has at least as many employees as it requires.
    fn is_feasible(&self, solution: &Solution) -> bool {
        self.coverage(solution)
            .iter()
            .zip(&self.coverage_reqs)
            .all(|(&have, &need)| have >= need)
    }
}

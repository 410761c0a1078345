//! Scalar parameters of a nurse scheduling instance.

/// The scalar shape of a scheduling cycle.
///
/// # Examples
///
/// ```
/// use u_cuckoo::nurse::ScheduleParams;
///
/// let params = ScheduleParams::new(3, 3, 4, 5).with_max_shifts_a_day(4);
/// assert_eq!(params.schedule_len(), 12);
/// assert_eq!(params.dimensionality(), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleParams {
    /// Number of employees.
    pub num_employees: usize,
    /// Days in the scheduling cycle.
    pub num_days: usize,
    /// Shifts per day.
    pub num_shifts: usize,
    /// Longest allowed run of consecutive worked shifts.
    pub max_shifts_in_row: usize,
    /// Declared limit on shifts per 24 hours. Carried but not enforced.
    pub max_shifts_a_day: Option<usize>,
    /// Declared minimum shifts per employee per cycle. Carried but not enforced.
    pub min_shifts: Option<usize>,
}

impl ScheduleParams {
    pub fn new(
        num_employees: usize,
        num_days: usize,
        num_shifts: usize,
        max_shifts_in_row: usize,
    ) -> Self {
        Self {
            num_employees,
            num_days,
            num_shifts,
            max_shifts_in_row,
            max_shifts_a_day: None,
            min_shifts: None,
        }
    }

    pub fn with_max_shifts_a_day(mut self, n: usize) -> Self {
        self.max_shifts_a_day = Some(n);
        self
    }

    pub fn with_min_shifts(mut self, n: usize) -> Self {
        self.min_shifts = Some(n);
        self
    }

    /// Time slots in one cycle: `num_days × num_shifts`.
    pub fn schedule_len(&self) -> usize {
        self.num_days * self.num_shifts
    }

    /// Decision variables: one per (employee, slot) pair.
    pub fn dimensionality(&self) -> usize {
        self.num_employees * self.schedule_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_sizes() {
        let p = ScheduleParams::new(4, 7, 3, 2);
        assert_eq!(p.schedule_len(), 21);
        assert_eq!(p.dimensionality(), 84);
    }

    #[test]
    fn test_unenforced_fields_default_to_none() {
        let p = ScheduleParams::new(1, 1, 1, 1);
        assert_eq!(p.max_shifts_a_day, None);
        assert_eq!(p.min_shifts, None);

        let p = p.with_max_shifts_a_day(2).with_min_shifts(3);
        assert_eq!(p.max_shifts_a_day, Some(2));
        assert_eq!(p.min_shifts, Some(3));
    }
}

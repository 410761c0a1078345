//! Nurse scheduling.
//!
//! A concrete binary [`Problem`](crate::Problem): assign employees to the
//! shifts of a repeating multi-day cycle, preferring cheap (well-liked)
//! slots, never exceeding a run of consecutive shifts, and meeting a
//! minimum staffing level per slot.
//!
//! # References
//!
//! - Burke, De Causmaecker, Vanden Berghe & Van Landeghem (2004),
//!   "The state of the art of nurse rostering"

mod params;
mod problem;

pub use params::ScheduleParams;
pub use problem::NurseScheduling;

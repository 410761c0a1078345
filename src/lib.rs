//! Cuckoo Search over real-valued and binary decision vectors.
//!
//! The engine is problem-agnostic: a problem describes its dimensionality,
//! optional per-variable bounds, a random solution generator and a fitness
//! function (higher is better). The search keeps a population of nests,
//! perturbs them with Lévy flights, accepts a cuckoo into a random nest
//! when it scores at least as well, and periodically abandons the weakest
//! nests for fresh random ones.
//!
//! - [`problem`]: the [`Problem`] trait and variable [`Constraint`]s.
//! - [`solution`]: decision vectors with a thresholded binary view.
//! - [`population`]: the nest collection and abandonment.
//! - [`cs`]: Lévy flights, configuration, the iteration loop and results.
//! - [`nurse`]: a nurse scheduling instance.
//! - [`ui`]: prompts, CSV matrix input and result display for driving
//!   programs.
//!
//! # Example
//!
//! ```
//! use u_cuckoo::cs::{CsConfig, CsRunner};
//! use u_cuckoo::{Problem, Solution};
//!
//! struct OneMax;
//!
//! impl Problem for OneMax {
//!     fn dimensionality(&self) -> usize {
//!         8
//!     }
//!
//!     fn fitness(&self, solution: &Solution) -> f64 {
//!         solution.count_ones() as f64
//!     }
//! }
//!
//! let config = CsConfig::default().with_max_iterations(50).with_seed(7);
//! let result = CsRunner::run(&OneMax, &config);
//! assert!(result.best_fitness >= 6.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate candidate nests with rayon. Results are identical
//!   to serial runs for the same seed.
//! - `serde`: serialization for configuration and solution types.

pub mod cs;
pub mod error;
pub mod nurse;
pub mod population;
pub mod problem;
pub mod random;
pub mod solution;
pub mod ui;

pub use error::ConfigError;
pub use population::Population;
pub use problem::{Constraint, Problem};
pub use solution::Solution;
